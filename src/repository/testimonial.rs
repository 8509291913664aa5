use crate::domain::testimonial::{NewTestimonial, Testimonial, TestimonialPatch};
use crate::domain::types::TestimonialId;
use crate::repository::{
    MemoryRepository, RepositoryResult, TestimonialReader, TestimonialWriter,
};

impl TestimonialReader for MemoryRepository {
    fn list_testimonials(&self) -> RepositoryResult<Vec<Testimonial>> {
        let store = self.read()?;
        Ok(store.testimonials.values().cloned().collect())
    }

    fn get_testimonial_by_id(
        &self,
        id: TestimonialId,
    ) -> RepositoryResult<Option<Testimonial>> {
        let store = self.read()?;
        Ok(store.testimonials.get(id.get()).cloned())
    }
}

impl TestimonialWriter for MemoryRepository {
    fn create_testimonial(&self, testimonial: &NewTestimonial) -> RepositoryResult<Testimonial> {
        let mut store = self.write()?;
        store.testimonials.insert_with(|id| {
            Ok(testimonial
                .clone()
                .into_testimonial(TestimonialId::new(id)?))
        })
    }

    fn update_testimonial(
        &self,
        id: TestimonialId,
        patch: TestimonialPatch,
    ) -> RepositoryResult<Option<Testimonial>> {
        let mut store = self.write()?;
        let Some(testimonial) = store.testimonials.get_mut(id.get()) else {
            return Ok(None);
        };
        patch.apply_to(testimonial);
        Ok(Some(testimonial.clone()))
    }

    fn delete_testimonial(&self, id: TestimonialId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.testimonials.remove(id.get()))
    }
}
