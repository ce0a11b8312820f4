//! Company data source: where basic company facts and IR figures come from.
//!
//! Default: `PlaceholderCompanyData`, fixed records standing in for a real
//! company database / IR scraper. Swap by injecting another implementation
//! into `CompanyAnalyzer::with_source`.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Basic company record embedded in the analysis prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyBasicInfo {
    pub name: String,
    pub industry: String,
    pub description: String,
}

/// Investor-relations summary embedded in the analysis prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrSummary {
    pub revenue_trend: String,
    pub profit_trend: String,
    pub key_initiatives: Vec<String>,
    pub challenges: Vec<String>,
}

#[async_trait]
pub trait CompanyDataSource: Send + Sync {
    async fn basic_info(&self, company_name: &str) -> Result<CompanyBasicInfo>;
    async fn ir_summary(&self, company_name: &str) -> Result<IrSummary>;
}

/// Fixed placeholder and mock IR data. Industry is not known yet.
pub struct PlaceholderCompanyData;

#[async_trait]
impl CompanyDataSource for PlaceholderCompanyData {
    async fn basic_info(&self, company_name: &str) -> Result<CompanyBasicInfo> {
        Ok(CompanyBasicInfo {
            name: company_name.to_string(),
            industry: "分析中...".to_string(),
            description: "企業情報を取得中...".to_string(),
        })
    }

    async fn ir_summary(&self, _company_name: &str) -> Result<IrSummary> {
        Ok(IrSummary {
            revenue_trend: "売上高: 増加傾向".to_string(),
            profit_trend: "営業利益: 安定".to_string(),
            key_initiatives: vec![
                "DX推進".to_string(),
                "海外展開".to_string(),
                "サステナビリティ強化".to_string(),
            ],
            challenges: vec![
                "人材確保".to_string(),
                "競争激化".to_string(),
                "コスト上昇".to_string(),
            ],
        })
    }
}
