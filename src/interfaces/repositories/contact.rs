use std::sync::Arc;

use async_trait::async_trait;
use sqlx::QueryBuilder;

use crate::{
    domain::entities::contact::{ContactInsert, ContactMessage, UpdateContactRequest},
    errors::AppError,
    interfaces::repositories::sqlx_repo::{push_patch_field, SqlxRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact_message(&self, insert: &ContactInsert)
        -> Result<ContactMessage, AppError>;
    async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn update_contact_message(
        &self,
        id: i64,
        patch: &UpdateContactRequest,
    ) -> Result<ContactMessage, AppError>;
    async fn delete_contact_message(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl<R: ContactRepository + ?Sized> ContactRepository for Arc<R> {
    async fn create_contact_message(
        &self,
        insert: &ContactInsert,
    ) -> Result<ContactMessage, AppError> {
        (**self).create_contact_message(insert).await
    }
    async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError> {
        (**self).get_contact_message_by_id(id).await
    }
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        (**self).list_contact_messages().await
    }
    async fn update_contact_message(
        &self,
        id: i64,
        patch: &UpdateContactRequest,
    ) -> Result<ContactMessage, AppError> {
        (**self).update_contact_message(id, patch).await
    }
    async fn delete_contact_message(&self, id: i64) -> Result<(), AppError> {
        (**self).delete_contact_message(id).await
    }
}

#[async_trait]
impl ContactRepository for SqlxRepo {
    async fn create_contact_message(
        &self,
        insert: &ContactInsert,
    ) -> Result<ContactMessage, AppError> {
        // is_read and created_at come from the table defaults
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&insert.name)
        .bind(&insert.email)
        .bind(&insert.subject)
        .bind(&insert.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn get_contact_message_by_id(&self, id: i64) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Contact", id))
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages =
            sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(messages)
    }

    async fn update_contact_message(
        &self,
        id: i64,
        patch: &UpdateContactRequest,
    ) -> Result<ContactMessage, AppError> {
        let mut qb = QueryBuilder::new("UPDATE contact_messages SET id = id");

        push_patch_field!(qb, "name", &patch.name);
        push_patch_field!(qb, "email", &patch.email);
        push_patch_field!(qb, "subject", &patch.subject);
        push_patch_field!(qb, "message", &patch.message);
        push_patch_field!(qb, "is_read", &patch.is_read);

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<ContactMessage>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Contact", id))
    }

    async fn delete_contact_message(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            Err(AppError::not_found("Contact", id))
        } else {
            Ok(())
        }
    }
}
