use studio_booking::domain::category::CategoryPatch;
use studio_booking::domain::class::ClassPatch;
use studio_booking::domain::types::{CategoryId, ClassId, LocationId, SpotCount};
use studio_booking::repository::{
    CategoryReader, CategoryWriter, ClassListQuery, ClassReader, ClassWriter, LocationWriter,
    MemoryRepository, PortfolioListQuery, PortfolioReader, RepositoryError, ServiceReader,
};

mod common;

#[test]
fn art_and_crafts_scenario() {
    let repo = MemoryRepository::new();
    let category = repo
        .create_category(&common::new_category("Art & Crafts"))
        .expect("should create category");
    let location = repo
        .create_location(&common::new_location("Downtown Studio"))
        .expect("should create location");
    let class = repo
        .create_class(&common::new_class(
            "Pottery Workshop for Beginners",
            category.id,
            location.id,
            12,
            8,
        ))
        .expect("should create class");

    assert_eq!(category.id.get(), 1);
    assert_eq!(location.id.get(), 1);
    assert_eq!(class.id.get(), 1);

    let details = repo
        .get_class_by_id(ClassId::new(1).unwrap())
        .expect("should read class")
        .expect("class should exist");
    assert_eq!(details.category.name, "Art & Crafts");
    assert_eq!(details.location.name, "Downtown Studio");
    assert_eq!(details.class.total_spots, 12);
    assert_eq!(details.class.available_spots, 8);
}

#[test]
fn insert_then_get_returns_same_fields() {
    let repo = MemoryRepository::new();
    let new = common::new_category("Music");
    let created = repo.create_category(&new).unwrap();
    let fetched = repo.get_category_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, new.into_category(created.id));
}

#[test]
fn delete_then_get_is_absent_and_ids_are_not_reused() {
    let repo = MemoryRepository::new();
    let first = repo.create_category(&common::new_category("Music")).unwrap();

    assert!(repo.delete_category(first.id).unwrap());
    assert!(repo.get_category_by_id(first.id).unwrap().is_none());
    assert!(!repo.delete_category(first.id).unwrap());
    assert!(!repo.delete_category(CategoryId::new(999).unwrap()).unwrap());

    let second = repo.create_category(&common::new_category("Music")).unwrap();
    assert_eq!(second.id.get(), 2);
}

#[test]
fn enrichment_reflects_latest_referent() {
    let repo = common::seeded_repo();
    let class_id = ClassId::new(1).unwrap();
    let category_id = repo
        .get_class_by_id(class_id)
        .unwrap()
        .unwrap()
        .class
        .category_id;

    repo.update_category(
        category_id,
        CategoryPatch {
            name: Some("Arts".try_into().unwrap()),
            ..Default::default()
        },
    )
    .unwrap()
    .unwrap();

    let details = repo.get_class_by_id(class_id).unwrap().unwrap();
    assert_eq!(details.category.name, "Arts");
}

#[test]
fn partial_update_leaves_other_fields_untouched() {
    let repo = common::seeded_repo();
    let id = ClassId::new(2).unwrap();
    let before = repo.get_class_by_id(id).unwrap().unwrap().class;

    let after = repo
        .update_class(
            id,
            ClassPatch {
                time: Some("3:00 PM - 6:00 PM".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(after.time, "3:00 PM - 6:00 PM");
    let mut expected = before;
    expected.time = after.time.clone();
    assert_eq!(after, expected);
}

#[test]
fn search_by_text() {
    let repo = common::seeded_repo();

    let pottery = repo
        .list_classes(ClassListQuery::default().search("pottery"))
        .unwrap();
    assert_eq!(pottery.len(), 1);
    assert_eq!(pottery[0].class.title, "Pottery Workshop for Beginners");

    let none = repo
        .list_classes(ClassListQuery::default().search("zzz-no-match"))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn filter_by_category_keeps_insertion_order() {
    let repo = common::seeded_repo();
    let category_id = CategoryId::new(1).unwrap();

    let classes = repo
        .list_classes(ClassListQuery::default().category(category_id))
        .unwrap();
    let ids: Vec<i32> = classes.iter().map(|c| c.class.id.get()).collect();
    assert_eq!(ids, vec![1, 5, 6]);
    assert!(classes.iter().all(|c| c.class.category_id == category_id));
}

#[test]
fn filters_combine() {
    let repo = common::seeded_repo();
    let classes = repo
        .list_classes(
            ClassListQuery::default()
                .category(CategoryId::new(1).unwrap())
                .location(LocationId::new(5).unwrap()),
        )
        .unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].class.title, "Urban Sketching Basics");
}

#[test]
fn availability_update() {
    let repo = common::seeded_repo();
    let id = ClassId::new(1).unwrap();

    repo.update_class_availability(id, SpotCount::new(5).unwrap())
        .unwrap()
        .unwrap();
    let class = repo.get_class_by_id(id).unwrap().unwrap().class;
    assert_eq!(class.available_spots, 5);
    assert_eq!(class.total_spots, 12);

    let err = repo
        .update_class_availability(id, SpotCount::new(13).unwrap())
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError(_)));
    assert_eq!(
        repo.get_class_by_id(id).unwrap().unwrap().class.available_spots,
        5
    );

    assert!(
        repo.update_class_availability(ClassId::new(99).unwrap(), SpotCount::new(1).unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn class_with_unknown_category_is_rejected() {
    let repo = common::seeded_repo();
    let err = repo
        .create_class(&common::new_class(
            "Orphan",
            CategoryId::new(42).unwrap(),
            LocationId::new(1).unwrap(),
            5,
            5,
        ))
        .unwrap_err();
    assert_eq!(
        err,
        RepositoryError::MissingReference {
            entity: "category",
            id: 42
        }
    );
}

#[test]
fn deleting_a_referenced_category_breaks_enrichment() {
    let repo = common::seeded_repo();
    assert!(repo.delete_category(CategoryId::new(2).unwrap()).unwrap());

    let err = repo.get_class_by_id(ClassId::new(2).unwrap()).unwrap_err();
    assert!(matches!(err, RepositoryError::Integrity(_)));
    assert!(repo.list_classes(ClassListQuery::default()).is_err());
}

#[test]
fn portfolio_items_carry_their_service() {
    let repo = common::seeded_repo();
    let web = repo
        .get_service_by_slug("web-design-development")
        .unwrap()
        .unwrap();

    let items = repo
        .list_portfolio_items(PortfolioListQuery::default().service(web.id))
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].service, web);
}
