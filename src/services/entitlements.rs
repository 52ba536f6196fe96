use crate::bindings::forms::FieldType;
use crate::bindings::viewer::ViewerProfile;

/// Billing plan of the current viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

impl Plan {
    pub fn from_slug(slug: &str) -> Self {
        if slug.eq_ignore_ascii_case("pro") {
            Plan::Pro
        } else {
            Plan::Free
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
        }
    }
}

/// Capability checks derived from the viewer's plan. Always passed in as a
/// plain value so gated call sites stay testable; never stashed in reactive
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entitlements {
    pub plan: Plan,
}

impl Entitlements {
    pub fn free() -> Self {
        Self { plan: Plan::Free }
    }

    pub fn pro() -> Self {
        Self { plan: Plan::Pro }
    }

    pub fn for_viewer(profile: &ViewerProfile) -> Self {
        Self {
            plan: Plan::from_slug(&profile.plan),
        }
    }

    /// Whether the viewer may add a field of this type to a form
    pub fn allows_field(&self, field_type: FieldType) -> bool {
        self.plan == Plan::Pro || !field_type.is_pro()
    }

    pub fn allows_templates(&self) -> bool {
        self.plan == Plan::Pro
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_slug_parsing_is_case_insensitive() {
        assert_eq!(Plan::from_slug("pro"), Plan::Pro);
        assert_eq!(Plan::from_slug("PRO"), Plan::Pro);
        assert_eq!(Plan::from_slug("free"), Plan::Free);
        assert_eq!(Plan::from_slug(""), Plan::Free);
        assert_eq!(Plan::from_slug("enterprise"), Plan::Free);
    }

    #[test]
    fn free_plan_blocks_gated_types_only() {
        let free = Entitlements::free();
        assert!(free.allows_field(FieldType::Text));
        assert!(free.allows_field(FieldType::Dropdown));
        assert!(free.allows_field(FieldType::Email));
        assert!(!free.allows_field(FieldType::File));
        assert!(!free.allows_field(FieldType::Country));
        assert!(!free.allows_field(FieldType::Address));
        assert!(!free.allows_field(FieldType::Multichoice));
    }

    #[test]
    fn pro_plan_allows_everything() {
        let pro = Entitlements::pro();
        for ty in FieldType::all() {
            assert!(pro.allows_field(*ty));
        }
        assert!(pro.allows_templates());
        assert!(!Entitlements::free().allows_templates());
    }

    #[test]
    fn viewer_profile_maps_to_entitlements() {
        let profile = ViewerProfile {
            plan: "pro".to_string(),
            ..Default::default()
        };
        assert_eq!(Entitlements::for_viewer(&profile), Entitlements::pro());
        assert_eq!(
            Entitlements::for_viewer(&ViewerProfile::default()),
            Entitlements::free()
        );
    }
}
