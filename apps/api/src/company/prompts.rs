// Prompt constants for the company analyzer.

/// System instruction for the structured company analysis.
pub const COMPANY_ANALYSIS_SYSTEM: &str = r#"
あなたは就活生向けの企業分析の専門家です。
提供された企業情報とIR情報を基に、以下の観点で分析してください：

1. 企業の強み・競争優位性
2. 事業戦略と成長分野
3. 業界内でのポジション
4. 直近の課題と対応策
5. 就活生が注目すべきポイント

分析結果は構造化されたJSONフォーマットで返してください。
"#;

/// Replace: {company_name}, {basic_info_json}, {ir_json}
pub const COMPANY_ANALYSIS_PROMPT_TEMPLATE: &str = r#"
企業名: {company_name}

基本情報:
{basic_info_json}

IR情報:
{ir_json}

上記の情報を基に、就活生向けの企業分析を実行してください。
"#;

/// Replace: {analysis_json}
pub const INTERVIEW_POINTS_PROMPT_TEMPLATE: &str = r#"
以下の企業分析結果を基に、面接で聞かれる可能性が高い質問を5つ生成してください：

企業分析結果:
{analysis_json}

例：
- 当社の強みは何だと思いますか？
- なぜ当社を志望するのですか？
- 当社の課題をどう解決したいですか？

リスト形式で回答してください。
"#;
