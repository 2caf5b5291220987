//! Field selectors sent with each listing request.

/// Fields needed to build the folder index.
pub const FOLDER_FIELDS: &str = "items(id,title,ownedByMe,parents(id,isRoot))";

/// Fields needed to materialize report rows.
pub const FILE_FIELDS: &str = "items(id,labels/restricted,ownedByMe,owners(emailAddress,permissionId),\
mimeType,parents(id,isRoot),permissionIds,permissions(emailAddress,id,role),title,webContentLink)";
