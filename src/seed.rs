//! Demo catalogue loaded into an empty store at startup.

use crate::domain::blog::NewBlogPost;
use crate::domain::category::NewCategory;
use crate::domain::class::NewClass;
use crate::domain::location::NewLocation;
use crate::domain::portfolio::NewPortfolioItem;
use crate::domain::service::NewService;
use crate::domain::team::NewTeamMember;
use crate::domain::testimonial::NewTestimonial;
use crate::domain::types::{
    BlogPostSlug, BlogPostTitle, CategoryName, ClassTitle, LocationName, PersonName,
    PortfolioTitle, PriceCents, ServiceName, ServiceSlug, SpotCount,
};
use crate::repository::{
    BlogPostWriter, CategoryReader, CategoryWriter, ClassWriter, LocationWriter,
    PortfolioWriter, RepositoryResult, ServiceWriter, TeamMemberWriter, TestimonialWriter,
};

const CATEGORIES: [(&str, &str, &str, &str); 6] = [
    ("Art & Crafts", "#3B82F6", "#1E40AF", "#DBEAFE"),
    ("Cooking", "#F59E0B", "#92400E", "#FEF3C7"),
    ("Fitness", "#10B981", "#065F46", "#D1FAE5"),
    ("Technology", "#8B5CF6", "#5B21B6", "#EDE9FE"),
    ("Languages", "#EC4899", "#9D174D", "#FCE7F3"),
    ("Music", "#EF4444", "#991B1B", "#FEE2E2"),
];

const LOCATIONS: [(&str, &str); 6] = [
    ("Downtown Studio", "123 Main St, Downtown"),
    ("Culinary Institute", "456 Chef Way, North End"),
    ("East Side Wellness Center", "789 Healthy Blvd, East Side"),
    ("Tech Hub Coworking", "321 Digital Lane, Innovation District"),
    ("City Park & Art Center", "654 Nature Path, Green District"),
    ("Waterfront Gallery", "987 Ocean View, Harborside"),
];

struct SampleClass {
    title: &'static str,
    description: &'static str,
    price: i32,
    price_unit: &'static str,
    total_spots: i32,
    available_spots: i32,
    image_url: &'static str,
    date: &'static str,
    time: &'static str,
    /// Index into `CATEGORIES`.
    category: usize,
    /// Index into `LOCATIONS`.
    location: usize,
}

const CLASSES: [SampleClass; 6] = [
    SampleClass {
        title: "Pottery Workshop for Beginners",
        description: "Learn the basics of pottery in this hands-on workshop perfect for beginners. All materials included.",
        price: 6500,
        price_unit: "per person",
        total_spots: 12,
        available_spots: 8,
        image_url: "https://images.unsplash.com/photo-1544531585-9847b68c8c86?auto=format&fit=crop&w=500&q=80",
        date: "Wed, June 15",
        time: "6:00 PM - 8:00 PM",
        category: 0,
        location: 0,
    },
    SampleClass {
        title: "Seasonal Farm-to-Table Cooking",
        description: "Learn to prepare delicious meals using fresh, seasonal ingredients from local farms. Includes dinner!",
        price: 8500,
        price_unit: "per person",
        total_spots: 10,
        available_spots: 2,
        image_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?auto=format&fit=crop&w=500&q=80",
        date: "Sat, June 18",
        time: "2:00 PM - 5:00 PM",
        category: 1,
        location: 1,
    },
    SampleClass {
        title: "Yoga for Stress Relief",
        description: "A gentle yoga class focused on stress relief and relaxation. Perfect for all experience levels.",
        price: 1500,
        price_unit: "per session",
        total_spots: 20,
        available_spots: 12,
        image_url: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?auto=format&fit=crop&w=500&q=80",
        date: "Every Monday",
        time: "7:00 PM - 8:00 PM",
        category: 2,
        location: 2,
    },
    SampleClass {
        title: "Intro to Web Development",
        description: "Learn the basics of HTML, CSS, and JavaScript in this workshop designed for complete beginners.",
        price: 12000,
        price_unit: "per person",
        total_spots: 15,
        available_spots: 0,
        image_url: "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?auto=format&fit=crop&w=500&q=80",
        date: "Sat-Sun, June 25-26",
        time: "10:00 AM - 4:00 PM",
        category: 3,
        location: 3,
    },
    SampleClass {
        title: "Urban Sketching Basics",
        description: "Learn to sketch urban scenes with simple techniques. All skill levels welcome. Materials provided.",
        price: 4500,
        price_unit: "per person",
        total_spots: 12,
        available_spots: 10,
        image_url: "https://images.unsplash.com/photo-1535131749006-b7f58c99034b?auto=format&fit=crop&w=500&q=80",
        date: "Sun, June 19",
        time: "9:00 AM - 12:00 PM",
        category: 0,
        location: 4,
    },
    SampleClass {
        title: "Photography Fundamentals",
        description: "Master the basics of composition, lighting and camera settings. Bring your own camera.",
        price: 8000,
        price_unit: "per person",
        total_spots: 8,
        available_spots: 3,
        image_url: "https://images.unsplash.com/photo-1503428593586-e225b39bddfe?auto=format&fit=crop&w=500&q=80",
        date: "Fri, June 24",
        time: "1:00 PM - 4:00 PM",
        category: 0,
        location: 5,
    },
];

/// (name, slug, icon, description)
const SERVICES: [(&str, &str, &str, &str); 6] = [
    (
        "Tech Virtual Assistant",
        "tech-virtual-assistant",
        "headphones",
        "Day-to-day technical support and admin for busy teams.",
    ),
    (
        "E-commerce Support",
        "ecommerce-support",
        "shopping-cart",
        "Store setup, catalogue upkeep and order operations.",
    ),
    (
        "Email Marketing",
        "email-marketing",
        "mail-plus",
        "Campaigns, automations and list hygiene that convert.",
    ),
    (
        "Web Design & Development",
        "web-design-development",
        "code",
        "Fast, accessible websites built to grow with you.",
    ),
    (
        "Social Media Management",
        "social-media-management",
        "share-2",
        "Content calendars, scheduling and community care.",
    ),
    (
        "AI Automation Development",
        "ai-automation-development",
        "bot",
        "Workflows and assistants that take repetitive work off your plate.",
    ),
];

/// Populate an empty store with the demo catalogue.
///
/// Does nothing when categories already exist, so calling it twice is safe.
pub fn seed_sample_data<R>(repo: &R) -> RepositoryResult<()>
where
    R: CategoryReader
        + CategoryWriter
        + LocationWriter
        + ClassWriter
        + ServiceWriter
        + PortfolioWriter
        + TeamMemberWriter
        + TestimonialWriter
        + BlogPostWriter,
{
    if !repo.list_categories()?.is_empty() {
        log::info!("Store already populated; skipping sample data");
        return Ok(());
    }

    seed_classes(repo)?;
    seed_agency(repo)?;
    log::info!("Sample data loaded");
    Ok(())
}

fn seed_classes<R>(repo: &R) -> RepositoryResult<()>
where
    R: CategoryWriter + LocationWriter + ClassWriter,
{
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, color, text_color, bg_color) in CATEGORIES {
        let category = repo.create_category(&NewCategory {
            name: CategoryName::new(name)?,
            color: color.to_string(),
            text_color: text_color.to_string(),
            bg_color: bg_color.to_string(),
        })?;
        category_ids.push(category.id);
    }

    let mut location_ids = Vec::with_capacity(LOCATIONS.len());
    for (name, address) in LOCATIONS {
        let location = repo.create_location(&NewLocation {
            name: LocationName::new(name)?,
            address: Some(address.to_string()),
        })?;
        location_ids.push(location.id);
    }

    for sample in &CLASSES {
        repo.create_class(&NewClass {
            title: ClassTitle::new(sample.title)?,
            description: sample.description.to_string(),
            price: PriceCents::new(sample.price)?,
            price_unit: sample.price_unit.to_string(),
            total_spots: SpotCount::new(sample.total_spots)?,
            available_spots: SpotCount::new(sample.available_spots)?,
            image_url: sample.image_url.to_string(),
            date: sample.date.to_string(),
            time: sample.time.to_string(),
            category_id: category_ids[sample.category],
            location_id: location_ids[sample.location],
        })?;
    }
    Ok(())
}

fn seed_agency<R>(repo: &R) -> RepositoryResult<()>
where
    R: ServiceWriter + PortfolioWriter + TeamMemberWriter + TestimonialWriter + BlogPostWriter,
{
    let mut services = Vec::with_capacity(SERVICES.len());
    for (name, slug, icon, description) in SERVICES {
        services.push(repo.create_service(&NewService {
            name: ServiceName::new(name)?,
            slug: ServiceSlug::new(slug)?,
            description: description.to_string(),
            icon: icon.to_string(),
            detailed_description: format!("{description} We scope, deliver and report monthly."),
        })?);
    }

    repo.create_portfolio_item(&NewPortfolioItem {
        title: PortfolioTitle::new("Boutique Store Relaunch")?,
        description: "Rebuilt a fashion boutique's storefront and checkout.".to_string(),
        image_url: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?auto=format&fit=crop&w=800&q=80".to_string(),
        client: "Maple & Thread".to_string(),
        service_id: services[3].id,
        result: "42% more completed checkouts in three months".to_string(),
        testimonial: "The new store paid for itself within a quarter.".to_string(),
        testimonial_author: "Dana Whitfield, Owner".to_string(),
    })?;
    repo.create_portfolio_item(&NewPortfolioItem {
        title: PortfolioTitle::new("Newsletter Revival")?,
        description: "Segmented a dormant list and rebuilt the welcome sequence.".to_string(),
        image_url: "https://images.unsplash.com/photo-1526628953301-3e589a6a8b74?auto=format&fit=crop&w=800&q=80".to_string(),
        client: "Harbor Coffee Roasters".to_string(),
        service_id: services[2].id,
        result: "Open rate up from 14% to 37%".to_string(),
        testimonial: String::new(),
        testimonial_author: String::new(),
    })?;

    for (name, role, bio) in [
        (
            "Maya Chen",
            "Founder & Strategist",
            "Ten years helping small businesses run on better systems.",
        ),
        (
            "Luis Ortega",
            "Lead Developer",
            "Builds the sites, stores and automations behind our projects.",
        ),
    ] {
        repo.create_team_member(&NewTeamMember {
            name: PersonName::new(name)?,
            role: role.to_string(),
            bio: bio.to_string(),
            image_url: String::new(),
        })?;
    }

    repo.create_testimonial(&NewTestimonial {
        name: PersonName::new("Priya Nair")?,
        company: "Nair Design Co.".to_string(),
        testimonial: "Responsive, organised and genuinely invested in our growth.".to_string(),
        image_url: String::new(),
    })?;

    repo.create_blog_post(&NewBlogPost {
        title: BlogPostTitle::new("Five Automations Every Small Shop Needs")?,
        slug: BlogPostSlug::new("five-automations-small-shop")?,
        content: "From abandoned-cart emails to inventory alerts, these five workflows save hours every week.".to_string(),
        excerpt: "Simple workflows that save hours every week.".to_string(),
        image_url: String::new(),
        author: "Maya Chen".to_string(),
        category: "Automation".to_string(),
        tags: vec!["automation".to_string(), "ecommerce".to_string()],
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ClassId;
    use crate::repository::{ClassReader, ClassListQuery, MemoryRepository, ServiceReader};

    #[test]
    fn seeds_once() {
        let repo = MemoryRepository::new();
        seed_sample_data(&repo).unwrap();
        seed_sample_data(&repo).unwrap();

        assert_eq!(repo.list_categories().unwrap().len(), 6);
        assert_eq!(repo.list_classes(ClassListQuery::default()).unwrap().len(), 6);
        assert_eq!(repo.list_services().unwrap().len(), 6);
    }

    #[test]
    fn first_class_is_enriched() {
        let repo = MemoryRepository::new();
        seed_sample_data(&repo).unwrap();

        let class = repo
            .get_class_by_id(ClassId::new(1).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(class.category.name, "Art & Crafts");
        assert_eq!(class.location.name, "Downtown Studio");
    }
}
