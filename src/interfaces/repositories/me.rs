use std::sync::Arc;

use async_trait::async_trait;
use sqlx::QueryBuilder;

use crate::{
    domain::entities::me::{Me, MeInsert, UpdateMeRequest},
    errors::AppError,
    interfaces::repositories::sqlx_repo::{push_patch_field, push_patch_slot, SqlxRepo},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeRepository: Send + Sync {
    async fn create_me(&self, insert: &MeInsert) -> Result<Me, AppError>;
    async fn get_me_by_id(&self, id: i64) -> Result<Me, AppError>;
    async fn list_me(&self) -> Result<Vec<Me>, AppError>;
    async fn update_me(&self, id: i64, patch: &UpdateMeRequest) -> Result<Me, AppError>;
    async fn delete_me(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
impl<R: MeRepository + ?Sized> MeRepository for Arc<R> {
    async fn create_me(&self, insert: &MeInsert) -> Result<Me, AppError> {
        (**self).create_me(insert).await
    }
    async fn get_me_by_id(&self, id: i64) -> Result<Me, AppError> {
        (**self).get_me_by_id(id).await
    }
    async fn list_me(&self) -> Result<Vec<Me>, AppError> {
        (**self).list_me().await
    }
    async fn update_me(&self, id: i64, patch: &UpdateMeRequest) -> Result<Me, AppError> {
        (**self).update_me(id, patch).await
    }
    async fn delete_me(&self, id: i64) -> Result<(), AppError> {
        (**self).delete_me(id).await
    }
}

#[async_trait]
impl MeRepository for SqlxRepo {
    async fn create_me(&self, insert: &MeInsert) -> Result<Me, AppError> {
        let me = sqlx::query_as::<_, Me>(
            r#"
            INSERT INTO profiles (
                first_name, last_name, email, phone,
                instagram, github, linkedin, telegram, education, work_history
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&insert.first_name)
        .bind(&insert.last_name)
        .bind(&insert.email)
        .bind(&insert.phone)
        .bind(&insert.instagram)
        .bind(&insert.github)
        .bind(&insert.linkedin)
        .bind(&insert.telegram)
        .bind(&insert.education)
        .bind(&insert.work_history)
        .fetch_one(&self.pool)
        .await?;

        Ok(me)
    }

    async fn get_me_by_id(&self, id: i64) -> Result<Me, AppError> {
        sqlx::query_as::<_, Me>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Me", id))
    }

    async fn list_me(&self) -> Result<Vec<Me>, AppError> {
        let profiles = sqlx::query_as::<_, Me>("SELECT * FROM profiles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(profiles)
    }

    async fn update_me(&self, id: i64, patch: &UpdateMeRequest) -> Result<Me, AppError> {
        // `SET id = id` keeps the statement valid when the patch is empty;
        // an empty patch still requires the row to exist.
        let mut qb = QueryBuilder::new("UPDATE profiles SET id = id");

        push_patch_field!(qb, "first_name", &patch.first_name);
        push_patch_field!(qb, "last_name", &patch.last_name);
        push_patch_field!(qb, "email", &patch.email);
        push_patch_field!(qb, "phone", &patch.phone);
        push_patch_slot!(qb, "instagram", &patch.instagram);
        push_patch_slot!(qb, "github", &patch.github);
        push_patch_slot!(qb, "linkedin", &patch.linkedin);
        push_patch_slot!(qb, "telegram", &patch.telegram);
        push_patch_slot!(qb, "education", &patch.education);
        push_patch_slot!(qb, "work_history", &patch.work_history);

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        qb.build_query_as::<Me>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Me", id))
    }

    async fn delete_me(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            Err(AppError::not_found("Me", id))
        } else {
            Ok(())
        }
    }
}
