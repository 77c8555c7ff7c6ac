//! Project CRUD operations with ownership enforcement.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use opsboard_core::error::AppError;
use opsboard_core::types::{PageRequest, PageResponse};
use opsboard_database::repositories::project::ProjectRepository;
use opsboard_database::repositories::team_member::TeamMemberRepository;
use opsboard_entity::project::{CreateProject, Project, UpdateProject};

use crate::context::RequestContext;

/// Manages project CRUD operations.
#[derive(Debug, Clone)]
pub struct ProjectService {
    /// Project repository.
    project_repo: Arc<ProjectRepository>,
    /// Team member repository, used to validate team assignments.
    member_repo: Arc<TeamMemberRepository>,
}

/// Request to create a new project.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Team member IDs assigned to the project.
    pub team_members: Vec<Uuid>,
}

/// Request to update a project. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateProjectRequest {
    /// New project name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement team member list.
    pub team_members: Option<Vec<Uuid>>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(project_repo: Arc<ProjectRepository>, member_repo: Arc<TeamMemberRepository>) -> Self {
        Self {
            project_repo,
            member_repo,
        }
    }

    /// Lists all projects owned by the requesting admin.
    pub async fn list_projects(&self, ctx: &RequestContext) -> Result<Vec<Project>, AppError> {
        self.project_repo.find_all(ctx.admin_id).await
    }

    /// Lists a page of projects owned by the requesting admin.
    pub async fn list_projects_page(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Project>, AppError> {
        self.project_repo.find_page(ctx.admin_id, &page).await
    }

    /// Gets a project by ID.
    ///
    /// A project owned by a different admin is indistinguishable from a
    /// missing one.
    pub async fn get_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Project, AppError> {
        self.project_repo
            .find_by_id(ctx.admin_id, project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// Creates a new project.
    ///
    /// Every referenced team member must exist under the requesting
    /// admin, otherwise the whole creation is rejected.
    pub async fn create_project(
        &self,
        ctx: &RequestContext,
        req: CreateProjectRequest,
    ) -> Result<Project, AppError> {
        self.require_members_exist(ctx, &req.team_members).await?;

        let project = self
            .project_repo
            .create(&CreateProject {
                admin_id: ctx.admin_id,
                name: req.name,
                description: req.description,
                team_members: req.team_members,
            })
            .await?;

        info!(
            admin_id = %ctx.admin_id,
            project_id = %project.id,
            "Project created"
        );

        Ok(project)
    }

    /// Updates a project's fields.
    ///
    /// A replacement team list is validated the same way as on create.
    pub async fn update_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
        req: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        if let Some(members) = &req.team_members {
            self.require_members_exist(ctx, members).await?;
        }

        let project = self
            .project_repo
            .update(
                ctx.admin_id,
                project_id,
                &UpdateProject {
                    name: req.name,
                    description: req.description,
                    team_members: req.team_members,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        info!(
            admin_id = %ctx.admin_id,
            project_id = %project.id,
            "Project updated"
        );

        Ok(project)
    }

    /// Deletes a project together with all of its tasks.
    pub async fn delete_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<(), AppError> {
        let deleted = self
            .project_repo
            .delete_cascade(ctx.admin_id, project_id)
            .await?;

        if !deleted {
            return Err(AppError::not_found("Project not found"));
        }

        info!(
            admin_id = %ctx.admin_id,
            project_id = %project_id,
            "Project deleted"
        );

        Ok(())
    }

    /// Verifies that every id in `members` names a team member owned by
    /// the requesting admin.
    async fn require_members_exist(
        &self,
        ctx: &RequestContext,
        members: &[Uuid],
    ) -> Result<(), AppError> {
        if members.is_empty() {
            return Ok(());
        }

        // The count matches distinct rows, so compare against a deduped list.
        let mut distinct = members.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let found = self
            .member_repo
            .count_existing(ctx.admin_id, &distinct)
            .await?;
        if found as usize != distinct.len() {
            return Err(AppError::not_found("Team member not found"));
        }

        Ok(())
    }
}
