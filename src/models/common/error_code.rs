use ts_rs::TS;

/// 业务错误码
///
/// 前三位对应 HTTP 状态码，后两位为域内编号。
#[derive(Debug, Clone, Copy, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx - 请求错误
    BadRequest = 40000,
    ValidationFailed = 40001,
    ScoreInvalid = 40002,
    UnsupportedLanguage = 40010,

    // 401xx - 认证错误
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx - 权限错误
    Forbidden = 40300,

    // 404xx - 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    AssignmentNotFound = 40402,
    SubmissionNotFound = 40403,

    // 409xx - 冲突
    UserAlreadyExists = 40900,

    // 500xx - 服务器错误
    InternalServerError = 50000,
    RegisterFailed = 50001,
    AssignmentCreationFailed = 50002,
    SubmissionCreationFailed = 50003,

    // 502xx - 远程执行服务错误
    ExecutionFailed = 50200,
    RuntimeNotFound = 50201,
}
