use actix_web::web;
use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, ID};

use crate::{
    domain::entities::{
        contact::ContactMessage, me::Me, pricing::Pricing, project::Project, skill::Skill,
    },
    AppState,
};

use super::parse_id;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Single profile record by id.
    async fn me(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Me> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state.me_handler.get_me(id).await.map_err(|e| e.extend())
    }

    /// All profile records in insertion order.
    async fn list_me(&self, ctx: &Context<'_>) -> GqlResult<Vec<Me>> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state.me_handler.list_me().await.map_err(|e| e.extend())
    }

    async fn project(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Project> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .project_handler
            .get_project(id)
            .await
            .map_err(|e| e.extend())
    }

    /// Projects, newest-created first.
    async fn projects(&self, ctx: &Context<'_>) -> GqlResult<Vec<Project>> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .project_handler
            .list_projects()
            .await
            .map_err(|e| e.extend())
    }

    async fn skill(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Skill> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .skill_handler
            .get_skill(id)
            .await
            .map_err(|e| e.extend())
    }

    async fn skills(&self, ctx: &Context<'_>) -> GqlResult<Vec<Skill>> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .skill_handler
            .list_skills()
            .await
            .map_err(|e| e.extend())
    }

    async fn pricing(&self, ctx: &Context<'_>, id: ID) -> GqlResult<Pricing> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .pricing_handler
            .get_pricing(id)
            .await
            .map_err(|e| e.extend())
    }

    async fn pricings(&self, ctx: &Context<'_>) -> GqlResult<Vec<Pricing>> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .pricing_handler
            .list_pricings()
            .await
            .map_err(|e| e.extend())
    }

    async fn contact(&self, ctx: &Context<'_>, id: ID) -> GqlResult<ContactMessage> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .contact_handler
            .get_contact_message(id)
            .await
            .map_err(|e| e.extend())
    }

    async fn contacts(&self, ctx: &Context<'_>) -> GqlResult<Vec<ContactMessage>> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .contact_handler
            .list_contact_messages()
            .await
            .map_err(|e| e.extend())
    }
}
