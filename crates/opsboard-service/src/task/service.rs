//! Task CRUD operations with ownership and referential enforcement.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use opsboard_core::error::AppError;
use opsboard_core::types::{PageRequest, PageResponse};
use opsboard_database::repositories::project::ProjectRepository;
use opsboard_database::repositories::task::{TaskFilter, TaskRepository};
use opsboard_database::repositories::team_member::TeamMemberRepository;
use opsboard_entity::project::Project;
use opsboard_entity::task::{CreateTask, Task, TaskStatus, UpdateTask};

use crate::context::RequestContext;

/// Manages task CRUD operations.
#[derive(Debug, Clone)]
pub struct TaskService {
    /// Task repository.
    task_repo: Arc<TaskRepository>,
    /// Project repository, used to resolve the task's parent project.
    project_repo: Arc<ProjectRepository>,
    /// Team member repository, used to validate assignments.
    member_repo: Arc<TeamMemberRepository>,
}

/// Filter parameters for listing tasks.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TaskQuery {
    /// Restrict to a single project.
    pub project_id: Option<Uuid>,
    /// Restrict to tasks assigned to a single member.
    pub member_id: Option<Uuid>,
    /// Restrict to a single status.
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
    /// Earliest deadline (inclusive).
    pub start_date: Option<DateTime<Utc>>,
    /// Latest deadline (inclusive).
    pub end_date: Option<DateTime<Utc>>,
}

impl TaskQuery {
    fn into_filter(self) -> TaskFilter {
        TaskFilter {
            project_id: self.project_id,
            member_id: self.member_id,
            status: self.status,
            search: self.search,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Request to create a new task.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateTaskRequest {
    /// The project the task belongs to.
    pub project_id: Uuid,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Due date.
    pub deadline: DateTime<Utc>,
    /// Members assigned to the task.
    pub assigned_members: Vec<Uuid>,
    /// Initial status. Defaults to pending when omitted upstream.
    pub status: TaskStatus,
}

/// Request to update a task. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateTaskRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Move the task to another project.
    pub project_id: Option<Uuid>,
    /// Replacement assignment list.
    pub assigned_members: Option<Vec<Uuid>>,
    /// New status.
    pub status: Option<TaskStatus>,
}

impl TaskService {
    /// Creates a new task service.
    pub fn new(
        task_repo: Arc<TaskRepository>,
        project_repo: Arc<ProjectRepository>,
        member_repo: Arc<TeamMemberRepository>,
    ) -> Self {
        Self {
            task_repo,
            project_repo,
            member_repo,
        }
    }

    /// Lists all tasks owned by the requesting admin, filtered.
    pub async fn list_tasks(
        &self,
        ctx: &RequestContext,
        query: TaskQuery,
    ) -> Result<Vec<Task>, AppError> {
        self.task_repo
            .find_all(ctx.admin_id, &query.into_filter())
            .await
    }

    /// Lists a page of tasks owned by the requesting admin, filtered.
    pub async fn list_tasks_page(
        &self,
        ctx: &RequestContext,
        query: TaskQuery,
        page: PageRequest,
    ) -> Result<PageResponse<Task>, AppError> {
        self.task_repo
            .find_page(ctx.admin_id, &query.into_filter(), &page)
            .await
    }

    /// Gets a task by ID.
    ///
    /// A task owned by a different admin is indistinguishable from a
    /// missing one.
    pub async fn get_task(&self, ctx: &RequestContext, task_id: Uuid) -> Result<Task, AppError> {
        self.task_repo
            .find_by_id(ctx.admin_id, task_id)
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))
    }

    /// Creates a new task.
    ///
    /// The parent project must exist under the requesting admin, every
    /// assigned member must exist, and every assigned member must be on
    /// the project's team. All checks pass before anything is written.
    pub async fn create_task(
        &self,
        ctx: &RequestContext,
        req: CreateTaskRequest,
    ) -> Result<Task, AppError> {
        let project = self.require_project(ctx, req.project_id).await?;
        self.require_valid_assignment(ctx, &project, &req.assigned_members)
            .await?;

        let task = self
            .task_repo
            .create(&CreateTask {
                admin_id: ctx.admin_id,
                project_id: req.project_id,
                title: req.title,
                description: req.description,
                deadline: req.deadline,
                assigned_members: req.assigned_members,
                status: req.status,
            })
            .await?;

        info!(
            admin_id = %ctx.admin_id,
            task_id = %task.id,
            project_id = %task.project_id,
            "Task created"
        );

        Ok(task)
    }

    /// Updates a task's fields.
    ///
    /// Assignment rules are re-checked against the task's effective
    /// project, which may itself change in the same request.
    pub async fn update_task(
        &self,
        ctx: &RequestContext,
        task_id: Uuid,
        req: UpdateTaskRequest,
    ) -> Result<Task, AppError> {
        let current = self.get_task(ctx, task_id).await?;

        let target_project_id = req.project_id.unwrap_or(current.project_id);
        let target_members = req
            .assigned_members
            .as_deref()
            .unwrap_or(&current.assigned_members);

        // Re-validate whenever either side of the assignment relation moves.
        if req.project_id.is_some() || req.assigned_members.is_some() {
            let project = self.require_project(ctx, target_project_id).await?;
            self.require_valid_assignment(ctx, &project, target_members)
                .await?;
        }

        let task = self
            .task_repo
            .update(
                ctx.admin_id,
                task_id,
                &UpdateTask {
                    title: req.title,
                    description: req.description,
                    deadline: req.deadline,
                    project_id: req.project_id,
                    assigned_members: req.assigned_members,
                    status: req.status,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Task not found"))?;

        info!(
            admin_id = %ctx.admin_id,
            task_id = %task.id,
            "Task updated"
        );

        Ok(task)
    }

    /// Deletes a task.
    pub async fn delete_task(&self, ctx: &RequestContext, task_id: Uuid) -> Result<(), AppError> {
        let deleted = self.task_repo.delete(ctx.admin_id, task_id).await?;

        if !deleted {
            return Err(AppError::not_found("Task not found"));
        }

        info!(
            admin_id = %ctx.admin_id,
            task_id = %task_id,
            "Task deleted"
        );

        Ok(())
    }

    /// Resolves a project under the requesting admin.
    async fn require_project(
        &self,
        ctx: &RequestContext,
        project_id: Uuid,
    ) -> Result<Project, AppError> {
        self.project_repo
            .find_by_id(ctx.admin_id, project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))
    }

    /// Verifies that every assigned member exists under the admin and
    /// belongs to the project's team.
    async fn require_valid_assignment(
        &self,
        ctx: &RequestContext,
        project: &Project,
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

        if let Some(outsider) = distinct.iter().find(|m| !project.has_member(**m)) {
            return Err(AppError::unauthorized(format!(
                "Member {outsider} is not part of the project team"
            )));
        }

        Ok(())
    }
}
