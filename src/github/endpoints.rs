// GitHub API endpoint functions.
// Provides typed methods for the directory listing and CI status fetches.

use serde::Deserialize;

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{ContentEntry, WorkflowRun};

/// Response wrapper for workflow runs list.
#[derive(Debug, Deserialize)]
struct WorkflowRunsResponse {
    #[allow(dead_code)]
    total_count: u64,
    workflow_runs: Vec<WorkflowRun>,
}

impl GitHubClient {
    /// List directory contents at a path on the given branch.
    /// An empty path lists the repository root.
    pub async fn get_contents(
        &mut self,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Vec<ContentEntry>> {
        let params = [("ref", branch)];
        let response = self
            .get_with_params(&format!("/repos/{}/contents/{}", repo, path), &params)
            .await?;
        let entries: Vec<ContentEntry> = response.json().await?;
        Ok(entries)
    }

    /// Get the most recent runs of a workflow file.
    pub async fn get_workflow_runs(
        &mut self,
        repo: &str,
        workflow_file: &str,
        per_page: u32,
    ) -> Result<Vec<WorkflowRun>> {
        let params = [("per_page", per_page.to_string())];
        let response = self
            .get_with_params(
                &format!("/repos/{}/actions/workflows/{}/runs", repo, workflow_file),
                &params,
            )
            .await?;
        let wrapper: WorkflowRunsResponse = response.json().await?;
        Ok(wrapper.workflow_runs)
    }
}
