pub mod community;
pub mod graphql;
pub mod user;

pub use community::{Community, CommunityPage, Cursor, Page, PageInfo, TotalCount};
pub use graphql::{
    CommunitiesData, CommunitiesVariables, CreateSessionData, GraphQlError, GraphQlRequest,
    GraphQlResponse, LoginPayload, MeData,
};
pub use user::{Credentials, User, UserSession};
