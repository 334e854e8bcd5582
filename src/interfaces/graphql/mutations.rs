use actix_web::web;
use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, ID};

use crate::{
    domain::entities::{
        contact::{ContactMessage, NewContactRequest, UpdateContactRequest},
        me::{Me, NewMeRequest, UpdateMeRequest},
        pricing::{NewPricingRequest, Pricing, UpdatePricingRequest},
        project::{NewProjectRequest, Project, UpdateProjectRequest},
        skill::{NewSkillRequest, Skill, UpdateSkillRequest},
    },
    AppState,
};

use super::{
    inputs::{
        UpdateContactInput, UpdateMeInput, UpdatePricingInput, UpdateProjectInput,
        UpdateSkillInput,
    },
    parse_id,
};

pub struct MutationRoot;

/// One create/update/delete triplet per entity kind. Creates and updates
/// return the resulting entity; deletes return true, and a missing id is
/// always an error, never a false flag.
#[Object]
impl MutationRoot {
    // ───── Me ───────────────────────────────────────────────────────

    async fn create_me(&self, ctx: &Context<'_>, input: NewMeRequest) -> GqlResult<Me> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .me_handler
            .create_me(input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_me(&self, ctx: &Context<'_>, id: ID, input: UpdateMeInput) -> GqlResult<Me> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let patch = UpdateMeRequest::from(input);
        state
            .me_handler
            .update_me(id, &patch)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_me(&self, ctx: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .me_handler
            .delete_me(id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    // ───── Project ──────────────────────────────────────────────────

    async fn create_project(
        &self,
        ctx: &Context<'_>,
        input: NewProjectRequest,
    ) -> GqlResult<Project> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .project_handler
            .create_project(input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateProjectInput,
    ) -> GqlResult<Project> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let patch = UpdateProjectRequest::from(input);
        state
            .project_handler
            .update_project(id, &patch)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .project_handler
            .delete_project(id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    // ───── Skill ────────────────────────────────────────────────────

    async fn create_skill(&self, ctx: &Context<'_>, input: NewSkillRequest) -> GqlResult<Skill> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .skill_handler
            .create_skill(input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_skill(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateSkillInput,
    ) -> GqlResult<Skill> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let patch = UpdateSkillRequest::from(input);
        state
            .skill_handler
            .update_skill(id, &patch)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_skill(&self, ctx: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .skill_handler
            .delete_skill(id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    // ───── Pricing ──────────────────────────────────────────────────

    async fn create_pricing(
        &self,
        ctx: &Context<'_>,
        input: NewPricingRequest,
    ) -> GqlResult<Pricing> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .pricing_handler
            .create_pricing(input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_pricing(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdatePricingInput,
    ) -> GqlResult<Pricing> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let patch = UpdatePricingRequest::from(input);
        state
            .pricing_handler
            .update_pricing(id, &patch)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_pricing(&self, ctx: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .pricing_handler
            .delete_pricing(id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    // ───── Contact ──────────────────────────────────────────────────

    async fn create_contact(
        &self,
        ctx: &Context<'_>,
        input: NewContactRequest,
    ) -> GqlResult<ContactMessage> {
        let state = ctx.data::<web::Data<AppState>>()?;
        state
            .contact_handler
            .create_contact_message(input)
            .await
            .map_err(|e| e.extend())
    }

    async fn update_contact(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateContactInput,
    ) -> GqlResult<ContactMessage> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        let patch = UpdateContactRequest::from(input);
        state
            .contact_handler
            .update_contact_message(id, &patch)
            .await
            .map_err(|e| e.extend())
    }

    async fn delete_contact(&self, ctx: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = ctx.data::<web::Data<AppState>>()?;
        let id = parse_id(&id).map_err(|e| e.extend())?;
        state
            .contact_handler
            .delete_contact_message(id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
