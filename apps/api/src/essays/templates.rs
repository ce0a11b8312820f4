//! Static fill-in-the-blank essay templates. No model call.

use std::collections::BTreeMap;

pub const SELF_PR_TEMPLATE_NAME: &str = "自己PR";
pub const MOTIVATION_TEMPLATE_NAME: &str = "志望動機";
pub const GAKUCHIKA_TEMPLATE_NAME: &str = "学生時代に力を入れたこと";

const SELF_PR_TEMPLATE: &str = "\
【結論】私の強みは○○です。

【エピソード】大学時代に○○に取り組み、○○という課題に直面しました。この課題に対し、○○の方法でアプローチし、○○という成果を上げることができました。

【学び】この経験から○○を学び、○○という能力を身につけました。

【企業での活用】この強みを貴社の○○業務において活かし、○○で貢献したいと考えています。";

const MOTIVATION_TEMPLATE: &str = "\
【きっかけ】○○がきっかけで貴社に興味を持ちました。

【企業の魅力】貴社の○○という点に強く共感し、○○という将来性に魅力を感じています。

【自分の強み】私は○○という経験を通じて○○という強みを身につけており、この強みを貴社の○○で活かしたいと考えています。

【入社後の目標】入社後は○○に取り組み、○○という形で貢献していきたいです。";

const GAKUCHIKA_TEMPLATE: &str = "\
【テーマ】学生時代に最も力を入れたことは○○です。

【動機】○○という理由でこの活動に取り組みました。

【課題と取り組み】活動中に○○という課題に直面し、○○という方法で解決に取り組みました。

【成果と学び】結果として○○という成果を上げ、○○を学ぶことができました。";

/// Essay-type name → template. Same three entries on every call.
pub fn essay_templates() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        (SELF_PR_TEMPLATE_NAME, SELF_PR_TEMPLATE),
        (MOTIVATION_TEMPLATE_NAME, MOTIVATION_TEMPLATE),
        (GAKUCHIKA_TEMPLATE_NAME, GAKUCHIKA_TEMPLATE),
    ])
}
