//! Typed-but-partial view over a parsed workload document.
//!
//! Every accessor is total: an unexpected shape reads as "absent", never as a failure.

use std::borrow::Cow;

use serde_yaml::{Mapping, Value};

/// Name reported for containers without a usable `name` field.
pub const UNNAMED_CONTAINER: &str = "unnamed";

/// The pod specification of a workload document.
#[derive(Clone, Copy, Debug)]
pub struct PodSpec<'a> {
    fields: &'a Mapping,
}

/// One entry of a pod spec's `containers` list.
#[derive(Clone, Copy, Debug)]
pub struct Container<'a> {
    fields: &'a Mapping,
}

impl<'a> PodSpec<'a> {
    /// Resolve the pod spec of a document.
    ///
    /// Controller kinds nest it at `spec.template.spec`, a bare `Pod` keeps it at `spec`. The
    /// nested location wins when both are mappings. Non-mapping documents have no pod spec.
    pub fn locate(document: &'a Value) -> Option<Self> {
        let root = document.as_mapping()?;
        let spec = mapping_at(root, "spec")?;

        let fields = mapping_at(spec, "template")
            .and_then(|template| mapping_at(template, "spec"))
            .unwrap_or(spec);

        Some(Self { fields })
    }

    /// Key presence only: an explicit `0` (or any other value) counts as set.
    pub fn has_termination_grace_period(&self) -> bool {
        self.fields.contains_key("terminationGracePeriodSeconds")
    }

    /// Containers in list order. A non-list `containers` reads as empty; non-mapping entries are
    /// skipped.
    pub fn containers(&self) -> Vec<Container<'a>> {
        self.fields
            .get("containers")
            .and_then(Value::as_sequence)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_mapping)
                    .map(|fields| Container { fields })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<'a> Container<'a> {
    /// The `name` field; numbers and booleans read in their plain form.
    pub fn name(&self) -> Cow<'a, str> {
        let name = match self.fields.get("name") {
            Some(Value::String(name)) => Cow::Borrowed(name.as_str()),
            Some(Value::Number(n)) => Cow::Owned(n.to_string()),
            Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
            _ => Cow::Borrowed(""),
        };
        if name.is_empty() {
            Cow::Borrowed(UNNAMED_CONTAINER)
        } else {
            name
        }
    }

    pub fn has_pre_stop(&self) -> bool {
        mapping_at(self.fields, "lifecycle")
            .and_then(|lifecycle| lifecycle.get("preStop"))
            .is_some_and(is_defined)
    }

    pub fn has_readiness_probe(&self) -> bool {
        self.fields.get("readinessProbe").is_some_and(is_defined)
    }
}

fn mapping_at<'a>(map: &'a Mapping, key: &str) -> Option<&'a Mapping> {
    map.get(key).and_then(Value::as_mapping)
}

/// `key: ~` is the same as leaving the key out.
fn is_defined(value: &Value) -> bool {
    !value.is_null()
}
