//! Sharing summary of a file.

use drivelinks_entity::item::Item;
use drivelinks_entity::permission::{PermissionRole, is_public_id};

/// Summary for files anyone with the link can open.
pub const PUBLIC_ACCESS: &str = "Anybody with the link";

/// Summary for files carrying only the owner's permission.
pub const PRIVATE_ACCESS: &str = "Not Shared with anyone";

/// Who a file is shared with.
///
/// Restricted files only list writers, since viewers and commenters cannot
/// use the direct link.
pub fn access_summary(item: &Item) -> String {
    if item.permission_ids.iter().any(|id| is_public_id(id)) {
        return PUBLIC_ACCESS.to_string();
    }
    if item.permission_ids.len() == 1 {
        return PRIVATE_ACCESS.to_string();
    }

    let owner_id = item.owner_permission_id();
    let restricted = item.labels.restricted;

    item.permissions
        .iter()
        .filter(|p| Some(p.id.as_str()) != owner_id && p.role != PermissionRole::Owner)
        .filter(|p| !restricted || p.role == PermissionRole::Writer)
        .filter_map(|p| p.email_address.as_deref())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivelinks_entity::item::ItemLabels;
    use drivelinks_entity::permission::{Owner, Permission};

    fn permission(id: &str, email: &str, role: PermissionRole) -> Permission {
        Permission {
            id: id.into(),
            email_address: Some(email.into()),
            role,
        }
    }

    fn shared_item(restricted: bool) -> Item {
        Item {
            id: Some("f".into()),
            permission_ids: vec!["p0".into(), "p1".into(), "p2".into()],
            permissions: vec![
                permission("p0", "me@example.com", PermissionRole::Owner),
                permission("p1", "ana@example.com", PermissionRole::Writer),
                permission("p2", "bo@example.com", PermissionRole::Reader),
            ],
            labels: ItemLabels {
                restricted,
                trashed: false,
            },
            owners: vec![Owner {
                email_address: Some("me@example.com".into()),
                permission_id: Some("p0".into()),
            }],
            ..Item::default()
        }
    }

    #[test]
    fn test_public_wins() {
        let mut item = shared_item(false);
        item.permission_ids.push("anyoneWithLink".into());
        assert_eq!(access_summary(&item), PUBLIC_ACCESS);

        let only_public = Item {
            permission_ids: vec!["anyone".into()],
            ..Item::default()
        };
        assert_eq!(access_summary(&only_public), PUBLIC_ACCESS);
    }

    #[test]
    fn test_single_permission_is_private() {
        let item = Item {
            permission_ids: vec!["p0".into()],
            ..Item::default()
        };
        assert_eq!(access_summary(&item), PRIVATE_ACCESS);
    }

    #[test]
    fn test_single_permission_is_private_when_restricted() {
        let mut item = shared_item(true);
        item.permission_ids = vec!["p0".into()];
        item.permissions.truncate(1);
        assert_eq!(access_summary(&item), PRIVATE_ACCESS);
    }

    #[test]
    fn test_lists_non_owner_collaborators() {
        assert_eq!(
            access_summary(&shared_item(false)),
            "ana@example.com,bo@example.com"
        );
    }

    #[test]
    fn test_restricted_lists_writers_only() {
        assert_eq!(access_summary(&shared_item(true)), "ana@example.com");
    }

    #[test]
    fn test_grants_without_email_skipped() {
        let mut item = shared_item(false);
        item.permission_ids.push("p3".into());
        item.permissions.push(Permission {
            id: "p3".into(),
            email_address: None,
            role: PermissionRole::Reader,
        });
        assert_eq!(access_summary(&item), "ana@example.com,bo@example.com");
    }
}
