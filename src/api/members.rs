use crate::api::{api_client, ApiError};
use crate::models::{ApiKey, ApiKeyList, Member, MemberList};

pub async fn list_members() -> Result<Vec<Member>, ApiError> {
    let list: MemberList = api_client().get("/api/members").await?;
    Ok(list.members)
}

pub async fn list_api_keys() -> Result<Vec<ApiKey>, ApiError> {
    let list: ApiKeyList = api_client().get("/api/api-keys").await?;
    Ok(list.api_keys)
}
