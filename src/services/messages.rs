use crate::domain::auth::AuthenticatedUser;
use crate::domain::message::{Message, NewMessage};
use crate::domain::types::MessageId;
use crate::repository::{MessageReader, MessageWriter};

use super::{ServiceError, ServiceResult, deleted_or_not_found, ensure_admin};

/// Store a contact form submission. Open to anonymous visitors.
pub fn submit_message<R>(payload: NewMessage, repo: &R) -> ServiceResult<Message>
where
    R: MessageWriter,
{
    let message = repo.create_message(&payload)?;
    log::info!("Contact message {} received from {}", message.id, message.email);
    Ok(message)
}

pub fn list_messages<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Vec<Message>>
where
    R: MessageReader,
{
    ensure_admin(user)?;
    Ok(repo.list_messages()?)
}

pub fn get_message<R>(id: MessageId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<Message>
where
    R: MessageReader,
{
    ensure_admin(user)?;
    repo.get_message_by_id(id)?.ok_or(ServiceError::NotFound)
}

pub fn delete_message<R>(id: MessageId, user: &AuthenticatedUser, repo: &R) -> ServiceResult<()>
where
    R: MessageWriter,
{
    ensure_admin(user)?;
    deleted_or_not_found(repo.delete_message(id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::EmailAddress;
    use crate::repository::MemoryRepository;
    use crate::services::test_support::{admin, visitor};

    #[test]
    fn anyone_submits_only_admins_read() {
        let repo = MemoryRepository::new();
        let message = submit_message(
            NewMessage {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: EmailAddress::new("jane@example.com").unwrap(),
                subject: "Hello".into(),
                message: "Do you teach kids?".into(),
            },
            &repo,
        )
        .unwrap();

        assert_eq!(list_messages(&visitor(), &repo), Err(ServiceError::Forbidden));
        assert_eq!(list_messages(&admin(), &repo).unwrap(), vec![message.clone()]);

        delete_message(message.id, &admin(), &repo).unwrap();
        assert_eq!(
            get_message(message.id, &admin(), &repo),
            Err(ServiceError::NotFound)
        );
    }
}
