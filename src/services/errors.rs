use thiserror::Error;
use uuid::Uuid;

/// Errors returned by the repository and membership services
///
/// Display strings are the user-facing messages sent back to clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("이미 존재하는 저장소 이름입니다.")]
    DuplicateName,

    #[error("저장소 소유자(Owner)는 권한을 변경할 수 없습니다. (항상 ADMIN 유지)")]
    OwnerRoleImmutable,

    #[error("저장소 소유자(Owner)는 강퇴할 수 없습니다.")]
    OwnerCannotBeKicked,

    #[error("관리자(ADMIN) 권한이 필요합니다.")]
    AdminRequired,

    #[error("저장소 소유자만 수행할 수 있는 작업입니다.")]
    OwnerRequired,

    #[error("저장소 멤버만 접근할 수 있습니다.")]
    MembershipRequired,

    #[error("이미 저장소 멤버입니다.")]
    AlreadyMember,

    #[error("저장소를 찾을 수 없습니다: {0}")]
    RepositoryNotFound(Uuid),

    #[error("사용자를 찾을 수 없습니다: {0}")]
    UserNotFound(String),

    #[error("멤버를 찾을 수 없습니다: {0}")]
    MemberNotFound(Uuid),

    #[error("{0}")]
    InvalidRole(String),

    #[error("{0}")]
    Validation(String),

    #[error("데이터베이스 오류: {0}")]
    Persistence(String),
}

impl ServiceError {
    /// True for errors caused by the acting user lacking permission
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            ServiceError::OwnerRoleImmutable
                | ServiceError::OwnerCannotBeKicked
                | ServiceError::AdminRequired
                | ServiceError::OwnerRequired
                | ServiceError::MembershipRequired
        )
    }
}

impl From<String> for ServiceError {
    fn from(message: String) -> Self {
        ServiceError::Persistence(message)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
