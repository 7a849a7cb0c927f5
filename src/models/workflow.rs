//! Jira workflow resources: classic workflow search/create shapes and the
//! bulk `workflows` read, create, update and validation payloads.

use serde::{Deserialize, Serialize};

/// Filter criteria for the paginated workflow search. Built by the caller and
/// only read by the library.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowSearchOptions {
    pub workflow_name: Vec<String>,
    pub expand: Vec<String>,
    pub query_string: Option<String>,
    pub order_by: Option<String>,
    pub is_active: Option<bool>,
}

impl WorkflowSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workflow_name(mut self, names: Vec<String>) -> Self {
        self.workflow_name = names;
        self
    }

    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = expand;
        self
    }

    pub fn query_string(mut self, query: impl Into<String>) -> Self {
        self.query_string = Some(query.into());
        self
    }

    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    pub fn is_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPageScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_last: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<WorkflowScheme>,
}

/// A workflow as returned by the classic search. Which fields are populated
/// depends on the `expand` values the caller requested.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<WorkflowPublishedIdScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<WorkflowTransitionScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<WorkflowStatusScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPublishedIdScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

/// A workflow transition.
///
/// Jira populates either the deprecated `from`/`to` pair or the
/// `to_status_reference`/`links` pair, never a mix. The remote API enforces
/// this; values are passed through unchecked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransitionScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<WorkflowRuleConfigurationScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ConditionGroupConfigurationScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_issue_event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Deprecated; use `to_status_reference`/`links`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub from: Vec<WorkflowStatusAndPortScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<WorkflowTransitionLinkScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Deprecated; use `to_status_reference`/`links`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<WorkflowStatusAndPortScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_status_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_screen: Option<WorkflowRuleConfigurationScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<WorkflowTriggerScheme>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<WorkflowRuleConfigurationScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRuleConfigurationScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionGroupConfigurationScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition_groups: Vec<ConditionGroupConfigurationScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<WorkflowRuleConfigurationScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatusAndPortScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransitionLinkScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_status_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTriggerScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowTransitionScreenScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransitionRulesScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<WorkflowTransitionRuleScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<WorkflowTransitionRuleScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_functions: Vec<WorkflowTransitionRuleScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowTransitionRuleScheme {
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowStatusScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<WorkflowStatusPropertiesScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatusPropertiesScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_editable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCreatedResponseScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

/// Payload for the classic single-workflow create endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowPayloadScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<WorkflowTransitionScreenScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<WorkflowTransitionPayloadScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowTransitionPayloadScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub from: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<WorkflowTransitionRulePayloadScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<WorkflowTransitionScreenPayloadScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowTransitionScreenPayloadScheme {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransitionRulePayloadScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<WorkflowConditionScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub post_functions: Vec<WorkflowTransitionRuleScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<WorkflowTransitionRuleScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowConditionScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<WorkflowConditionScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSearchCriteria {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_and_issue_types: Vec<WorkflowSearchProjectIssueTypeMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflow_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflow_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSearchProjectIssueTypeMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowReadResponseScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<JiraWorkflowStatusScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<JiraWorkflowScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorkflowScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<WorkflowStatusScopeScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_point_layout: Option<WorkflowLayoutScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<WorkflowReferenceStatusScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<WorkflowTransitionScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usages: Vec<ProjectIssueTypesScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<WorkflowDocumentVersionScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowStatusScopeScheme {
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<WorkflowScopeProjectScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIssueTypesScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectIdScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issue_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectIdScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowLayoutScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl WorkflowLayoutScheme {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowReferenceStatusScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<WorkflowLayoutScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocumentVersionScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCapabilitiesScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connect_rules: Vec<AvailableWorkflowConnectRuleScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forge_rules: Vec<AvailableWorkflowForgeRuleScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_rules: Vec<AvailableWorkflowSystemRuleScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trigger_rules: Vec<AvailableWorkflowTriggers>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableWorkflowConnectRuleScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addon_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableWorkflowForgeRuleScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableWorkflowSystemRuleScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incompatible_rule_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available_for_initial_transition: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableWorkflowTriggers {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_types: Vec<AvailableWorkflowTriggerTypeScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AvailableWorkflowTriggerTypeScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
}

/// Payload for the bulk workflow create endpoint.
///
/// `statuses` is the catalogue shared by every workflow in the payload; each
/// workflow also lists the statuses it lays out. Use [`add_status`] to keep
/// both views in step.
///
/// [`add_status`]: WorkflowCreatesPayload::add_status
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowCreatesPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<WorkflowScopeScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<WorkflowStatusUpdateScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<WorkflowCreateScheme>,
}

impl WorkflowCreatesPayload {
    /// Appends `status` to the shared catalogue and, for every workflow
    /// already in the payload, a layout entry referencing it plus `transition`.
    ///
    /// Workflows added afterwards do not receive earlier statuses.
    pub fn add_status(
        &mut self,
        status: WorkflowStatusUpdateScheme,
        layout: Option<WorkflowLayoutScheme>,
        transition: TransitionUpdateDtoScheme,
    ) {
        let status_reference = status.status_reference.clone().unwrap_or_default();
        self.statuses.push(status);

        for workflow in &mut self.workflows {
            workflow.statuses.push(StatusLayoutUpdateScheme {
                layout,
                status_reference: status_reference.clone(),
            });
            workflow.transitions.push(transition.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowScopeScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<WorkflowScopeProjectScheme>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowScopeProjectScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatusUpdateScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCreateScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_point_layout: Option<WorkflowLayoutScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<StatusLayoutUpdateScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionUpdateDtoScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusLayoutUpdateScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<WorkflowLayoutScheme>,
    pub status_reference: String,
}

/// Transition shape used by the bulk create and update payloads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionUpdateDtoScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<WorkflowRuleConfigurationScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<ConditionGroupUpdateScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_issue_event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub from: Vec<StatusReferenceAndPortScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<WorkflowTransitionLinkScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<StatusReferenceAndPortScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_status_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_screen: Option<WorkflowRuleConfigurationScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<WorkflowTriggerScheme>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<WorkflowRuleConfigurationScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionGroupUpdateScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition_groups: Vec<ConditionGroupUpdateScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<WorkflowRuleConfigurationScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReferenceAndPortScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowCreateResponseScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<JiraWorkflowStatusScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<JiraWorkflowScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraWorkflowStatusScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<WorkflowScopeScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usages: Vec<ProjectIssueTypesScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationOptionsForCreateScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<WorkflowCreatesPayload>,
    #[serde(rename = "validationOptions")]
    pub options: Option<ValidationOptionsLevelScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationOptionsLevelScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowValidationErrorListScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<WorkflowValidationErrorScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowValidationErrorScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_reference: Option<WorkflowElementReferenceScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowElementReferenceScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_mapping_reference: Option<ProjectAndIssueTypePairScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAndIssueTypePairScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowUpdatesPayloadScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<WorkflowStatusUpdateScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<WorkflowUpdateScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowUpdateScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_status_mappings: Vec<StatusMigrationScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_point_layout: Option<WorkflowLayoutScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_mappings: Vec<StatusMappingDtoScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<WorkflowDocumentVersionScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMigrationScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_status_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMappingDtoScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_migrations: Vec<StatusMigrationScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<StatusLayoutUpdateScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionUpdateDtoScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowUpdateResponseScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<JiraWorkflowStatusScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<JiraWorkflowScheme>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationOptionsForUpdateScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<WorkflowUpdatesPayloadScheme>,
    #[serde(rename = "validationOptions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ValidationOptionsLevelScheme>,
}
