use validator::Validate;

use crate::{
    domain::entities::contact::{
        ContactInsert, ContactMessage, NewContactRequest, UpdateContactRequest,
    },
    errors::AppError,
    interfaces::repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Handles the creation of a new contact message; is_read starts false
    pub async fn create_contact_message(
        &self,
        request: NewContactRequest,
    ) -> Result<ContactMessage, AppError> {
        request.validate()?;

        let insert = ContactInsert::from(request);

        self.contact_repo.create_contact_message(&insert).await
    }

    /// Retrieves a contact message by its ID
    pub async fn get_contact_message(&self, id: i64) -> Result<ContactMessage, AppError> {
        self.contact_repo.get_contact_message_by_id(id).await
    }

    /// Lists all contact messages in insertion order
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list_contact_messages().await
    }

    /// Applies a partial update; flipping is_read requires an explicit value
    pub async fn update_contact_message(
        &self,
        id: i64,
        patch: &UpdateContactRequest,
    ) -> Result<ContactMessage, AppError> {
        patch.validate()?;

        self.contact_repo.update_contact_message(id, patch).await
    }

    /// Deletes a contact message by its ID
    pub async fn delete_contact_message(&self, id: i64) -> Result<(), AppError> {
        self.contact_repo.delete_contact_message(id).await
    }
}
