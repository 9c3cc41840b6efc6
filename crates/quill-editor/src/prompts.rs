//! Instruction blocks prepended to each operation's prompt.
//!
//! Each block names the role, the rules, and the exact JSON shape expected
//! back. Request-specific sections (constraints, option, transcript) are
//! appended by the operation modules.

pub const ANALYZE: &str = r#"You are an experienced editor and researcher. You are given a "prompt chain":
the transcript of a multi-turn conversation between a person and an AI assistant.
Turn it into material a writer can build an article from.

TASK:
1. Digest the chain. List its key points and state the core question it explores.
2. Map its claims. Label each one with an evidence level:
   - "from_chain": stated explicitly in the conversation.
   - "general_background": common knowledge that frames the topic.
   - "needs_verification": statistics, quotations or strong assertions that must be
     checked against an outside source. Never invent a source for them.
3. Offer exactly three distinct article framings, in this order:
   - id "explainer": educational, clear, foundational.
   - id "meta": reflective; examines the process or the implications of the conversation.
   - id "research_brief": professional; separates what is known from what is open.
   For each framing give a title, a thesis, a section outline, who it is best for,
   research tasks, sources worth checking and keywords.

OUTPUT:
Respond with ONLY a JSON object of this shape, with no commentary and no code fences:
{
  "topicTitle": "Main topic",
  "chainDigest": ["Key point", "Key point"],
  "coreQuestion": "The central question",
  "claimMap": [
    {"claim": "Claim text", "evidenceLevel": "from_chain | general_background | needs_verification", "notes": "optional"}
  ],
  "options": [
    {
      "id": "explainer",
      "title": "Title",
      "thesis": "Thesis",
      "outline": ["Section", "Section"],
      "bestFor": "Intended readers",
      "researchToDo": ["Task"],
      "sourcesToCheck": ["Venue"],
      "keywords": ["Keyword"]
    }
  ]
}
"options" must contain exactly three entries, with ids "explainer", "meta" and "research_brief"."#;

pub const DRAFT: &str = r###"You are a senior staff writer. Write a publication-ready article from a prompt
chain and the framing the editor selected.

RULES:
1. Never invent citations, studies, statistics or quotations. When the article needs a
   fact the chain does not support, write the literal marker [SOURCE NEEDED: query]
   in its place, where query is a specific search that would verify it.
2. Follow the outline of the selected framing.
3. Include a "Counter-argument" section where the topic allows one, and a
   "What would change my mind" section.
4. Use "##" headings for the main sections.
5. Start directly with the article. No preamble such as "Here is the article".

OUTPUT:
Respond with ONLY a JSON object of this shape, with no commentary and no code fences:
{
  "title": "Headline",
  "lede": "Opening paragraph",
  "articleMarkdown": "Full article in markdown",
  "seo": {
    "metaTitle": "SEO title",
    "metaDescription": "About 150 characters",
    "slug": "url-slug"
  },
  "researchChecklist": [
    {"question": "What must be checked", "whyItMatters": "Why it matters", "howToVerify": "How to check it"}
  ],
  "claimMap": [
    {"claim": "Claim used in the article", "evidenceLevel": "from_chain | general_background | needs_verification"}
  ],
  "sourcePlaceholders": ["query of every [SOURCE NEEDED: query] marker in the article"]
}"###;

pub const REWRITE: &str = r#"You are an expert editor. Rewrite the article below following the instruction.

RULES:
1. Do not change factual claims or citations.
2. Keep every [SOURCE NEEDED: ...] marker exactly as written.
3. "Shorten" means cut filler and keep the key insights.
4. "Punchier" means active voice and shorter sentences.
5. Keep the markdown structure intact.
6. Return the complete article, not a diff or a fragment.

OUTPUT:
Respond with ONLY a JSON object of this shape, with no commentary and no code fences:
{"articleMarkdown": "The rewritten article"}"#;

/// Display fallbacks for absent constraint fields.
pub mod fallback {
    pub const AUDIENCE: &str = "General";
    pub const ANALYZE_TONE: &str = "Neutral/Professional";
    pub const DRAFT_TONE: &str = "Neutral";
    pub const LENGTH: &str = "Medium";
    pub const PLATFORM: &str = "Blog";
    pub const SEO_KEYWORD: &str = "None";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_rules_are_complete() {
        assert!(DRAFT.contains(r###"Use "##" headings"###));
        assert!(DRAFT.contains("[SOURCE NEEDED: query]"));
        assert!(DRAFT.contains("What would change my mind"));
        assert!(DRAFT.trim_end().ends_with('}'));
    }

    #[test]
    fn analyze_names_every_evidence_level_and_angle() {
        for label in ["from_chain", "general_background", "needs_verification"] {
            assert!(ANALYZE.contains(label), "missing {label}");
        }
        for id in ["explainer", "meta", "research_brief"] {
            assert!(ANALYZE.contains(&format!("id \"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn rewrite_keeps_placeholders() {
        assert!(REWRITE.contains("[SOURCE NEEDED: ...]"));
        assert!(REWRITE.ends_with(r#"{"articleMarkdown": "The rewritten article"}"#));
    }
}
