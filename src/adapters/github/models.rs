//! GitHub API request/response models.

use serde::{Deserialize, Serialize};

/// Body for `PUT /orgs/{org}/memberships/{username}`.
#[derive(Debug, Clone, Serialize)]
pub struct OrgMembershipRequest {
    /// Role granted to the member (`member` or `admin`).
    pub role: String,
}

/// Response from `PUT /orgs/{org}/memberships/{username}`.
///
/// `state` is `active` when the user was already in the org and
/// `pending` when the call produced an invitation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgMembershipResponse {
    /// Membership state (`active` or `pending`).
    pub state: String,
    /// Role held by the member.
    pub role: String,
}

/// Body for `PUT /repos/{org}/{repo}/collaborators/{username}`.
#[derive(Debug, Clone, Serialize)]
pub struct CollaboratorRequest {
    /// Permission level (`pull`, `push`, or `admin`).
    pub permission: String,
}
