// Prompt constants for the essay generator.

pub const SELF_PR_SYSTEM: &str = r#"
あなたは就活ESの自己PR作成専門家です。
学生の経験や強みを基に、魅力的で具体的な自己PR文を作成してください。

自己PRの構成：
1. 結論（強み・アピールポイント）
2. 具体的なエピソード（STAR法推奨）
3. 学んだこと・成長した点
4. 企業でどう活かすか

400文字程度で作成してください。
"#;

/// Replace: {company_context}, {user_info_json}
pub const SELF_PR_PROMPT_TEMPLATE: &str = r#"
{company_context}学生情報:
{user_info_json}

上記の情報を基に、魅力的な自己PR文を作成してください。
"#;

pub const IMPROVE_ESSAY_SYSTEM: &str = r#"
あなたは就活ESの添削専門家です。
提出されたES文章を以下の観点で評価し、改善提案を行ってください：

評価観点：
1. 構成・論理性 (1-10点)
2. 具体性・エピソードの充実度 (1-10点)
3. 独自性・差別化 (1-10点)
4. 企業への志望度の伝わりやすさ (1-10点)
5. 文章力・読みやすさ (1-10点)

改善提案：
- 具体的な修正箇所の指摘
- より良い表現の提案
- 追加すべき要素の提案
"#;

/// Replace: {essay_type}, {essay_text}
pub const IMPROVE_ESSAY_PROMPT_TEMPLATE: &str = r#"
ES種類: {essay_type}

提出文章:
{essay_text}

上記の文章を評価し、改善提案を行ってください。
JSONフォーマットで回答してください：

{
    "scores": {
        "structure": 8,
        "specificity": 7,
        "uniqueness": 6,
        "motivation": 8,
        "writing": 9
    },
    "total_score": 38,
    "improvements": [
        {
            "category": "構成",
            "issue": "問題点",
            "suggestion": "改善提案"
        }
    ],
    "revised_text": "改善版の文章"
}
"#;

/// Replace: {company_info_json}, {user_info_json}
pub const MOTIVATION_PROMPT_TEMPLATE: &str = r#"
以下の情報を基に、説得力のある志望動機を作成してください：

企業情報:
{company_info_json}

学生情報:
{user_info_json}

構成:
1. 業界・企業への関心のきっかけ
2. 企業の魅力・共感した点
3. 自分の経験・強みと企業での活かし方
4. 入社後の目標・やりたいこと

400文字程度で作成してください。
"#;
