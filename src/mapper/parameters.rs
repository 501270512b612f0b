//! Mapping for the `parameters` collection of an app.
//!
//! On the host side parameters are a set of bags, each naming its key in
//! `param_key_name`. On the wire they are a map keyed by that name.

use super::fields::{blocks, bool_field, int_field, optional, string_field};
use super::{FieldBag, FieldMapper};
use crate::models::AppParameter;
use serde_json::Value;
use std::collections::BTreeMap;

/// Field carrying the parameter's key name.
pub const PARAM_KEY_NAME: &str = "param_key_name";

/// Mapper for [`AppParameter`] records.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParameterMapper;

impl FieldMapper for ParameterMapper {
    type Record = AppParameter;

    fn inflate(&self, bag: &FieldBag) -> AppParameter {
        AppParameter {
            id: int_field(bag, "param_id"),
            label: string_field(bag, "label"),
            user_attribute_mappings: string_field(bag, "user_attribute_mappings"),
            user_attribute_macros: string_field(bag, "user_attribute_macros"),
            attributes_transformations: string_field(bag, "attributes_transformations"),
            skip_if_blank: bool_field(bag, "skip_if_blank"),
            values: string_field(bag, "values"),
            default_values: string_field(bag, "default_values"),
            provisioned_entitlements: bool_field(bag, "provisioned_entitlements"),
            safe_entitlements_enabled: bool_field(bag, "safe_entitlements_enabled"),
        }
    }

    fn flatten(&self, param: &AppParameter) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("param_id".into(), optional(param.id));
        bag.insert("label".into(), optional(param.label.clone()));
        bag.insert(
            "user_attribute_mappings".into(),
            optional(param.user_attribute_mappings.clone()),
        );
        bag.insert(
            "user_attribute_macros".into(),
            optional(param.user_attribute_macros.clone()),
        );
        bag.insert(
            "attributes_transformations".into(),
            optional(param.attributes_transformations.clone()),
        );
        bag.insert("skip_if_blank".into(), optional(param.skip_if_blank));
        bag.insert("values".into(), optional(param.values.clone()));
        bag.insert("default_values".into(), optional(param.default_values.clone()));
        bag.insert(
            "provisioned_entitlements".into(),
            optional(param.provisioned_entitlements),
        );
        bag.insert(
            "safe_entitlements_enabled".into(),
            optional(param.safe_entitlements_enabled),
        );
        bag
    }
}

impl ParameterMapper {
    /// Inflate every parameter bag stored under `name`, keyed by key name.
    ///
    /// Elements without a string `param_key_name` cannot be keyed and are
    /// skipped. A repeated key name keeps the last element;
    /// [`validate_config`](crate::schema::ResourceSchema::validate_config)
    /// rejects such sets up front. Returns `None` when the field is absent or
    /// not a list, and an empty map when it is an empty list.
    pub fn inflate_collection(
        &self,
        bag: &FieldBag,
        name: &str,
    ) -> Option<BTreeMap<String, AppParameter>> {
        bag.get(name).and_then(Value::as_array)?;
        Some(
            blocks(bag, name)
                .filter_map(|param| {
                    let key = string_field(param, PARAM_KEY_NAME)?;
                    Some((key, self.inflate(param)))
                })
                .collect(),
        )
    }

    /// Flatten a parameter map into one bag per parameter.
    ///
    /// Each bag carries its key name in `param_key_name`. Output order follows
    /// the map's iteration order and carries no meaning.
    pub fn flatten_collection(&self, params: &BTreeMap<String, AppParameter>) -> Vec<FieldBag> {
        params
            .iter()
            .map(|(key, param)| {
                let mut bag = self.flatten(param);
                bag.insert(PARAM_KEY_NAME.into(), Value::String(key.clone()));
                bag
            })
            .collect()
    }
}
