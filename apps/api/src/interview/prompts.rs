// Prompt constants for interview preparation.

pub const QUESTIONS_SYSTEM: &str = r#"
あなたは人事面接官の専門家です。
企業情報を基に、その企業の面接で実際に聞かれそうな質問を生成してください。

質問カテゴリ：
1. 基本質問（自己PR、志望動機など）
2. 企業固有質問（その企業の事業や戦略に関する質問）
3. 業界理解質問
4. 状況対応質問（ケース面接的な要素）
5. 価値観・カルチャーフィット確認質問

各カテゴリから2-3問ずつ、計15問程度生成してください。
"#;

/// Replace: {company_name}, {industry}, {job_type}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"
企業名: {company_name}
業界: {industry}
職種: {job_type}

上記の企業の面接で聞かれる可能性が高い質問を生成してください。

JSONフォーマットで回答：
{
    "basic_questions": ["質問1", "質問2"],
    "company_specific": ["質問1", "質問2"],
    "industry_questions": ["質問1", "質問2"],
    "situational": ["質問1", "質問2"],
    "culture_fit": ["質問1", "質問2"]
}
"#;

pub const ANSWER_TEMPLATE_SYSTEM: &str = r#"
あなたは面接対策の専門家です。
面接質問に対して、学生のプロフィールを基に効果的な回答例を作成してください。

回答の構成：
1. 結論ファースト
2. 具体的なエピソード
3. 学んだこと・成長
4. 企業での活かし方（志望動機系の場合）

STAR法（Situation, Task, Action, Result）を意識した構成にしてください。
"#;

/// Replace: {question}, {user_profile_json}
pub const ANSWER_TEMPLATE_PROMPT_TEMPLATE: &str = r#"
面接質問: {question}

学生プロフィール:
{user_profile_json}

上記の質問に対する効果的な回答例を作成してください。
回答時間は1-2分程度を想定してください。

JSONフォーマットで回答：
{
    "answer_template": "回答例",
    "key_points": ["アピールポイント1", "アピールポイント2"],
    "tips": ["回答時のコツ1", "回答時のコツ2"],
    "avoid": ["避けるべき表現や内容"]
}
"#;

/// Replace: {question}, {answer}
pub const EVALUATE_ANSWER_PROMPT_TEMPLATE: &str = r#"
面接質問: {question}
学生の回答: {answer}

以下の観点で回答を評価してください（各項目1-10点）：
1. 質問への適切性
2. 具体性・エピソードの充実
3. 論理性・構成
4. 熱意・表現力
5. 独自性・差別化

総合評価と改善提案もお願いします。

JSONフォーマットで回答してください。
"#;

/// Replace: {feedback_json}
pub const OVERALL_ASSESSMENT_PROMPT_TEMPLATE: &str = r#"
模擬面接の結果を基に、全体的な評価とアドバイスを生成してください：

面接結果:
{feedback_json}

以下の形式で回答してください：
- 全体的な印象（良い点）
- 改善すべき点
- 次回面接に向けたアドバイス
"#;
