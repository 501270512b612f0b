//! Mapping for the `provisioning` block.

use super::fields::{bool_field, optional};
use super::{FieldBag, FieldMapper};
use crate::models::AppProvisioning;

#[derive(Debug, Default, Clone, Copy)]
pub struct ProvisioningMapper;

impl FieldMapper for ProvisioningMapper {
    type Record = AppProvisioning;

    fn inflate(&self, bag: &FieldBag) -> AppProvisioning {
        AppProvisioning {
            enabled: bool_field(bag, "enabled"),
        }
    }

    fn flatten(&self, provisioning: &AppProvisioning) -> FieldBag {
        let mut bag = FieldBag::new();
        bag.insert("enabled".into(), optional(provisioning.enabled));
        bag
    }
}
