use crate::errors::{repository::RepositoryError, service::ServiceError};
use thiserror::Error;
use tonic::Status;

#[derive(Debug, Error)]
pub enum AppErrorGrpc {
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
    #[error("Unhandled: {0}")]
    Unhandled(String),
}

impl From<AppErrorGrpc> for Status {
    fn from(err: AppErrorGrpc) -> Self {
        match err {
            AppErrorGrpc::Service(service_err) => match service_err {
                ServiceError::Validation(errors) => {
                    Status::invalid_argument(format!("Validation failed: {errors:#?}"))
                }

                ServiceError::Forbidden(msg) => Status::permission_denied(msg),

                ServiceError::Repo(repo_err) => match repo_err {
                    RepositoryError::NotFound => Status::not_found("Not found"),
                    RepositoryError::Conflict(msg) => Status::already_exists(msg),
                    RepositoryError::AlreadyExists(msg) => Status::already_exists(msg),
                    RepositoryError::ForeignKey(msg) => {
                        Status::failed_precondition(format!("Foreign key constraint: {msg}"))
                    }
                    RepositoryError::Sqlx(_) => Status::internal("Database error"),
                    RepositoryError::Custom(msg) => Status::internal(msg),
                },

                ServiceError::UpstreamRejected(msg) => Status::invalid_argument(msg),

                // Never echo credential details to callers.
                ServiceError::UpstreamConfig(_) => {
                    Status::internal("Upstream configuration error")
                }

                ServiceError::UpstreamUnavailable(msg) => Status::unavailable(msg),

                ServiceError::Upstream(msg) => Status::internal(format!("Upstream error: {msg}")),

                ServiceError::Internal(msg) => Status::internal(msg),

                ServiceError::Custom(msg) => Status::internal(msg),
            },

            AppErrorGrpc::Unhandled(msg) => Status::internal(format!("Unhandled error: {msg}")),
        }
    }
}

impl From<Status> for AppErrorGrpc {
    fn from(status: Status) -> Self {
        match status.code() {
            tonic::Code::InvalidArgument => {
                AppErrorGrpc::Service(ServiceError::Validation(vec![status.message().to_string()]))
            }

            tonic::Code::NotFound => {
                AppErrorGrpc::Service(ServiceError::Repo(RepositoryError::NotFound))
            }

            tonic::Code::PermissionDenied => {
                AppErrorGrpc::Service(ServiceError::Forbidden(status.message().to_string()))
            }

            tonic::Code::AlreadyExists => AppErrorGrpc::Service(ServiceError::Repo(
                RepositoryError::AlreadyExists(status.message().to_string()),
            )),

            tonic::Code::FailedPrecondition | tonic::Code::Aborted => AppErrorGrpc::Service(
                ServiceError::Repo(RepositoryError::ForeignKey(status.message().to_string())),
            ),

            tonic::Code::Unavailable => {
                AppErrorGrpc::Service(ServiceError::UpstreamUnavailable(
                    status.message().to_string(),
                ))
            }

            tonic::Code::Internal => {
                AppErrorGrpc::Service(ServiceError::Internal(status.message().to_string()))
            }

            _ => AppErrorGrpc::Unhandled(format!(
                "gRPC error: {} - {}",
                status.code(),
                status.message()
            )),
        }
    }
}
