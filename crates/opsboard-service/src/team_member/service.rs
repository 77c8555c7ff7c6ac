//! Team member CRUD operations with ownership enforcement.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use opsboard_core::error::AppError;
use opsboard_core::types::{PageRequest, PageResponse};
use opsboard_database::repositories::team_member::TeamMemberRepository;
use opsboard_entity::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};

use crate::context::RequestContext;

/// Manages team member CRUD operations.
#[derive(Debug, Clone)]
pub struct TeamMemberService {
    /// Team member repository.
    member_repo: Arc<TeamMemberRepository>,
}

/// Request to create a new team member.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateTeamMemberRequest {
    /// Member name.
    pub name: String,
    /// Member email, unique per admin.
    pub email: String,
    /// Job title or role description.
    pub designation: String,
}

/// Request to update a team member. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateTeamMemberRequest {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New designation.
    pub designation: Option<String>,
}

impl TeamMemberService {
    /// Creates a new team member service.
    pub fn new(member_repo: Arc<TeamMemberRepository>) -> Self {
        Self { member_repo }
    }

    /// Lists all team members owned by the requesting admin.
    pub async fn list_members(&self, ctx: &RequestContext) -> Result<Vec<TeamMember>, AppError> {
        self.member_repo.find_all(ctx.admin_id).await
    }

    /// Lists a page of team members owned by the requesting admin.
    pub async fn list_members_page(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<TeamMember>, AppError> {
        self.member_repo.find_page(ctx.admin_id, &page).await
    }

    /// Gets a team member by ID.
    ///
    /// A member owned by a different admin is indistinguishable from a
    /// missing one.
    pub async fn get_member(
        &self,
        ctx: &RequestContext,
        member_id: Uuid,
    ) -> Result<TeamMember, AppError> {
        self.member_repo
            .find_by_id(ctx.admin_id, member_id)
            .await?
            .ok_or_else(|| AppError::not_found("Team member not found"))
    }

    /// Creates a new team member.
    ///
    /// The email must be unique within the admin's team.
    pub async fn create_member(
        &self,
        ctx: &RequestContext,
        req: CreateTeamMemberRequest,
    ) -> Result<TeamMember, AppError> {
        let member = self
            .member_repo
            .create(&CreateTeamMember {
                admin_id: ctx.admin_id,
                name: req.name,
                email: req.email,
                designation: req.designation,
            })
            .await?;

        info!(
            admin_id = %ctx.admin_id,
            member_id = %member.id,
            "Team member created"
        );

        Ok(member)
    }

    /// Updates a team member's fields.
    pub async fn update_member(
        &self,
        ctx: &RequestContext,
        member_id: Uuid,
        req: UpdateTeamMemberRequest,
    ) -> Result<TeamMember, AppError> {
        // An email change must not collide with another member of the team.
        if let Some(email) = &req.email {
            if let Some(existing) = self.member_repo.find_by_email(ctx.admin_id, email).await? {
                if existing.id != member_id {
                    return Err(AppError::conflict("Team member already exists"));
                }
            }
        }

        let member = self
            .member_repo
            .update(
                ctx.admin_id,
                member_id,
                &UpdateTeamMember {
                    name: req.name,
                    email: req.email,
                    designation: req.designation,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Team member not found"))?;

        info!(
            admin_id = %ctx.admin_id,
            member_id = %member.id,
            "Team member updated"
        );

        Ok(member)
    }

    /// Deletes a team member and scrubs it from every project team and
    /// task assignment.
    pub async fn delete_member(
        &self,
        ctx: &RequestContext,
        member_id: Uuid,
    ) -> Result<(), AppError> {
        let deleted = self.member_repo.delete_cascade(ctx.admin_id, member_id).await?;

        if !deleted {
            return Err(AppError::not_found("Team member not found"));
        }

        info!(
            admin_id = %ctx.admin_id,
            member_id = %member_id,
            "Team member deleted"
        );

        Ok(())
    }
}
