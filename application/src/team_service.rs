use domain::gateway::TeamGateway;
use domain::models::{TeamMember, TeamMemberDraft};
use shared::types::Result;
use std::collections::HashMap;

const FETCH_FALLBACK: &str = "Failed to fetch team members";
const CREATE_FALLBACK: &str = "Failed to add team member";
const UPDATE_FALLBACK: &str = "Failed to update team member";
const DELETE_FALLBACK: &str = "Failed to remove team member";

/// In-memory mirror of the team directory.
pub struct TeamService<G> {
    gateway: G,
    members: Vec<TeamMember>,
    is_loading: bool,
    last_error: Option<String>,
}

impl<G: TeamGateway> TeamService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            members: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }

    pub async fn fetch_all(&mut self) -> Result<&[TeamMember]> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.list_members().await;
        self.is_loading = false;
        match result {
            Ok(members) => {
                self.members = members;
                Ok(&self.members)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(FETCH_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn add(&mut self, draft: &TeamMemberDraft) -> Result<TeamMember> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.create_member(draft).await;
        self.is_loading = false;
        match result {
            Ok(member) => {
                self.members.insert(0, member.clone());
                Ok(member)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(CREATE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, draft: &TeamMemberDraft) -> Result<TeamMember> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.update_member(id, draft).await;
        self.is_loading = false;
        match result {
            Ok(updated) => {
                if let Some(slot) = self.members.iter_mut().find(|member| member.id == id) {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(UPDATE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str) -> Result<()> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.delete_member(id).await;
        self.is_loading = false;
        match result {
            Ok(()) => {
                self.members.retain(|member| member.id != id);
                Ok(())
            }
            Err(err) => {
                self.last_error = Some(err.human_message(DELETE_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn find_by_id(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn by_department(&self, department: &str) -> Vec<&TeamMember> {
        self.members
            .iter()
            .filter(|member| member.department == department)
            .collect()
    }

    /// Distinct departments in first-seen order.
    pub fn departments(&self) -> Vec<String> {
        let mut departments: Vec<String> = Vec::new();
        for member in &self.members {
            if !member.department.is_empty()
                && !departments.iter().any(|seen| seen == &member.department)
            {
                departments.push(member.department.clone());
            }
        }
        departments
    }

    pub fn department_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for member in &self.members {
            *counts.entry(member.department.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
