use chrono::Utc;

use crate::domain::message::{Message, NewMessage};
use crate::domain::types::MessageId;
use crate::repository::{MemoryRepository, MessageReader, MessageWriter, RepositoryResult};

impl MessageReader for MemoryRepository {
    fn list_messages(&self) -> RepositoryResult<Vec<Message>> {
        let store = self.read()?;
        Ok(store.messages.values().cloned().collect())
    }

    fn get_message_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>> {
        let store = self.read()?;
        Ok(store.messages.get(id.get()).cloned())
    }
}

impl MessageWriter for MemoryRepository {
    fn create_message(&self, message: &NewMessage) -> RepositoryResult<Message> {
        let mut store = self.write()?;
        let created_at = Utc::now().naive_utc();
        store
            .messages
            .insert_with(|id| Ok(message.clone().into_message(MessageId::new(id)?, created_at)))
    }

    fn delete_message(&self, id: MessageId) -> RepositoryResult<bool> {
        let mut store = self.write()?;
        Ok(store.messages.remove(id.get()))
    }
}
