// Five-stage workflow: company analysis → user personality → gap analysis →
// tailored essays → interview preparation, plus the per-session store the
// HTTP layer hands workflows out of.

pub mod handlers;
pub mod orchestrator;
pub mod profile;
pub mod session;
pub mod state;

use thiserror::Error;

/// Why a stage refused to run. A refused stage leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("企業分析を先に実行してください")]
    MissingCompanyAnalysis,

    #[error("ユーザーパーソナリティと企業要求パーソナリティの両方が必要です")]
    MissingPersonalities,

    #[error("ギャップ分析を先に実行してください")]
    MissingGapAnalysis,

    #[error("ユーザー情報を提供してください")]
    MissingUserInfo,

    #[error("ユーザープロフィール情報が見つかりません")]
    ProfileNotFound,

    /// The company analyzer reported `status = error`.
    #[error("{0}")]
    CompanyAnalysis(String),

    /// The stage's principal model reply was a gateway error.
    #[error("{0}")]
    Model(String),
}
