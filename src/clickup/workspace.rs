//! Workspace-level operations: hierarchy tree and members.

use serde_json::{Value, json};

use super::client::ClickUpClient;
use super::error::{ApiError, ApiResult};

/// One node of the space → folder → list tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub kind: &'static str,
    pub id: String,
    pub name: String,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    fn from_value(kind: &'static str, value: &Value) -> Self {
        Self {
            kind,
            id: id_of(value),
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("(unnamed)")
                .to_string(),
            children: Vec::new(),
        }
    }
}

fn id_of(value: &Value) -> String {
    match value.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn array<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Render the hierarchy as an indented tree.
pub fn render_tree(root_label: &str, nodes: &[HierarchyNode]) -> String {
    let mut out = String::from(root_label);
    out.push('\n');
    render_children(nodes, "", &mut out);
    out
}

fn render_children(nodes: &[HierarchyNode], prefix: &str, out: &mut String) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(&format!(
            "{}{}{}: {} (id: {})\n",
            prefix, branch, node.kind, node.name, node.id
        ));
        render_children(&node.children, &format!("{}{}", prefix, indent), out);
    }
}

#[derive(Clone)]
pub struct WorkspaceService {
    client: ClickUpClient,
}

impl WorkspaceService {
    pub fn new(client: ClickUpClient) -> Self {
        Self { client }
    }

    /// Walk spaces, folders and lists of the bound workspace.
    pub async fn hierarchy(&self) -> ApiResult<Vec<HierarchyNode>> {
        let team_id = self.client.team_id();
        let spaces = self
            .client
            .send(self.client.get(&format!("/v2/team/{}/space", team_id)))
            .await?;

        let mut tree = Vec::new();
        for space in array(&spaces, "spaces") {
            let mut space_node = HierarchyNode::from_value("Space", space);

            let folders = self
                .client
                .send(
                    self.client
                        .get(&format!("/v2/space/{}/folder", space_node.id)),
                )
                .await?;
            for folder in array(&folders, "folders") {
                let mut folder_node = HierarchyNode::from_value("Folder", folder);
                folder_node.children = array(folder, "lists")
                    .iter()
                    .map(|l| HierarchyNode::from_value("List", l))
                    .collect();
                space_node.children.push(folder_node);
            }

            let lists = self
                .client
                .send(self.client.get(&format!("/v2/space/{}/list", space_node.id)))
                .await?;
            space_node.children.extend(
                array(&lists, "lists")
                    .iter()
                    .map(|l| HierarchyNode::from_value("List", l)),
            );

            tree.push(space_node);
        }

        Ok(tree)
    }

    /// Members of the bound workspace.
    pub async fn members(&self) -> ApiResult<Value> {
        let teams = self.client.send(self.client.get("/v2/team")).await?;
        let team_id = self.client.team_id();

        let team = array(&teams, "teams")
            .iter()
            .find(|t| id_of(t) == team_id)
            .ok_or_else(|| ApiError::InvalidResponse {
                message: format!("Workspace {} is not accessible with this token", team_id),
            })?;

        let members = team.get("members").cloned().unwrap_or_else(|| json!([]));
        Ok(json!({ "team_id": team_id, "members": members }))
    }
}
