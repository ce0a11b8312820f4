// Prompt constants for the industry matcher.

/// Replace: {industry_list}
pub const INDUSTRY_FIT_SYSTEM_TEMPLATE: &str = r#"
あなたは就活生の業界適性を分析する専門家です。
学生の経験、スキル、価値観を基に、どの業界が適しているかを分析してください。

以下の業界を対象に分析してください：
{industry_list}

各業界について適性度を1-10で評価し、理由も含めて回答してください。
結果はJSONフォーマットで返してください。
"#;

/// Replace: {user_profile_json}
pub const INDUSTRY_FIT_PROMPT_TEMPLATE: &str = r#"
学生プロフィール:
{user_profile_json}

上記のプロフィールを基に、業界適性を分析してください。

期待する出力フォーマット:
{
    "overall_assessment": "総合的な評価コメント",
    "industry_scores": {
        "業界名": {
            "score": 8,
            "reason": "適性が高い理由",
            "recommended_roles": ["おすすめ職種1", "おすすめ職種2"]
        }
    },
    "top_recommendations": ["最適業界1", "最適業界2", "最適業界3"]
}
"#;

/// Replace: {industry_name}
pub const INDUSTRY_INFO_PROMPT_TEMPLATE: &str = r#"
{industry_name}業界について、就活生向けに以下の情報を提供してください：

1. 業界の特徴と動向
2. 求められる人材像
3. 主要企業
4. 平均年収レンジ
5. キャリアパス
6. 業界の将来性
7. 入社後の業務内容例

JSONフォーマットで回答してください。
"#;

/// Replace: {industry_name}, {strengths}
pub const MOTIVATION_TEMPLATE_PROMPT_TEMPLATE: &str = r#"
{industry_name}業界志望の学生向けに、志望動機のテンプレートを作成してください。

学生の強み:
{strengths}

以下の構成で作成してください：
1. 業界への関心のきっかけ
2. 業界の魅力・将来性への言及
3. 自分の強みと業界への貢献
4. 具体的な目標・やりたいこと

400文字程度でお願いします。
"#;
