use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub label: String,
    pub finished: bool,
}

/// Attributes supplied when creating a todo. The id is assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTodo {
    pub label: Option<String>,
    pub finished: Option<bool>,
}

impl NewTodo {
    pub fn labelled(label: impl Into<String>) -> Self {
        NewTodo {
            label: Some(label.into()),
            finished: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    pub label: Option<String>,
    pub finished: Option<bool>,
}

impl TodoPatch {
    pub fn finished(finished: bool) -> Self {
        TodoPatch {
            label: None,
            finished: Some(finished),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.finished.is_none()
    }
}

/// Attribute-equality constraints. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub label: Option<String>,
    pub finished: Option<bool>,
}

impl Criteria {
    pub fn finished(finished: bool) -> Self {
        Criteria {
            label: None,
            finished: Some(finished),
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.label.as_ref().is_none_or(|label| *label == todo.label)
            && self.finished.is_none_or(|finished| finished == todo.finished)
    }
}
