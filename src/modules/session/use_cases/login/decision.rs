use crate::modules::session::core::credentials::LoginError;
use crate::modules::session::core::principal::Principal;

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { principal: Principal },
    Rejected { reason: LoginError },
}
