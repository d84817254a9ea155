// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

use crate::model::{BlockBody, Canvas, Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Substring,
    Regex,
    Fuzzy,
}

/// One search hit. `score` is only meaningful in fuzzy mode, where results
/// are ranked best-first; substring and regex hits keep canvas order with a
/// zero score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMatch {
    node_id: NodeId,
    score: i64,
}

impl NodeMatch {
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Searches node labels and content texts.
///
/// The haystack per node is its label plus the content title, description,
/// block texts and list item texts. A blank needle matches nothing.
pub fn search_nodes(
    canvas: &Canvas,
    needle: &str,
    mode: SearchMode,
    case_insensitive: bool,
) -> Result<Vec<NodeMatch>, regex::Error> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    match mode {
        SearchMode::Substring => {
            let hits = if case_insensitive {
                let needle_lower = needle.to_lowercase();
                canvas
                    .nodes()
                    .values()
                    .filter(|node| haystack(node).to_lowercase().contains(&needle_lower))
                    .map(zero_score_match)
                    .collect()
            } else {
                canvas
                    .nodes()
                    .values()
                    .filter(|node| haystack(node).contains(needle))
                    .map(zero_score_match)
                    .collect()
            };
            Ok(hits)
        }
        SearchMode::Regex => {
            let regex = RegexBuilder::new(needle)
                .case_insensitive(case_insensitive)
                .build()?;
            Ok(canvas
                .nodes()
                .values()
                .filter(|node| regex.is_match(&haystack(node)))
                .map(zero_score_match)
                .collect())
        }
        SearchMode::Fuzzy => {
            let needle = if case_insensitive {
                needle.to_lowercase()
            } else {
                needle.to_owned()
            };

            let mut hits = Vec::new();
            for node in canvas.nodes().values() {
                let hay = if case_insensitive {
                    haystack(node).to_lowercase()
                } else {
                    haystack(node)
                };
                let Some(score) = fuzzy_score(&needle, &hay) else {
                    continue;
                };
                hits.push(NodeMatch {
                    node_id: node.node_id().clone(),
                    score,
                });
            }
            hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.node_id.cmp(&b.node_id)));
            Ok(hits)
        }
    }
}

fn zero_score_match(node: &Node) -> NodeMatch {
    NodeMatch {
        node_id: node.node_id().clone(),
        score: 0,
    }
}

fn haystack(node: &Node) -> String {
    let mut hay = node.label().to_owned();
    let Some(content) = node.content() else {
        return hay;
    };

    push_line(&mut hay, content.title());
    push_line(&mut hay, content.description());
    for block in content.blocks() {
        match block.body() {
            BlockBody::List { items } => {
                for item in items {
                    push_line(&mut hay, item.text());
                }
            }
            BlockBody::Checklist { items } => {
                for item in items {
                    push_line(&mut hay, item.text());
                }
            }
            body => {
                if let Some(text) = body.text() {
                    push_line(&mut hay, text);
                }
            }
        }
    }
    hay
}

fn push_line(hay: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    hay.push('\n');
    hay.push_str(text);
}

#[derive(Debug, Clone, Copy)]
struct SubsequenceStats {
    first: usize,
    span: usize,
    consecutive: usize,
    start_boundary: bool,
}

/// Ranks a fuzzy candidate. `None` means the needle is not even a character
/// subsequence of the haystack, which is the noise cutoff.
fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let subseq = subsequence_stats(needle, haystack)?;
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let ratio_score = (ratio * 1000.0).round() as i64;

    let mut score = ratio_score;
    score -= subseq.span as i64;
    score -= (subseq.first as i64) / 4;
    score += (subseq.consecutive as i64) * 40;
    if subseq.start_boundary {
        score += 150;
    }
    if haystack.contains(needle) {
        score += 2000;
    } else {
        score += 500;
    }

    Some(score)
}

fn subsequence_stats(needle: &str, haystack: &str) -> Option<SubsequenceStats> {
    let mut needle_iter = needle.chars().peekable();
    let mut first: Option<usize> = None;
    let mut last: usize = 0;
    let mut prev_match: Option<usize> = None;
    let mut consecutive: usize = 0;
    let mut start_boundary = false;
    let mut prev_hay: Option<char> = None;

    for (idx, ch) in haystack.chars().enumerate() {
        let Some(&want) = needle_iter.peek() else {
            break;
        };

        if ch == want {
            needle_iter.next();

            if first.is_none() {
                first = Some(idx);
                start_boundary = prev_hay.map_or(true, is_boundary_char);
            }

            if let Some(prev) = prev_match {
                if idx == prev + 1 {
                    consecutive += 1;
                }
            }
            prev_match = Some(idx);
            last = idx;
        }

        prev_hay = Some(ch);
    }

    if needle_iter.peek().is_some() {
        return None;
    }

    let first = first?;
    Some(SubsequenceStats {
        first,
        span: last.saturating_sub(first).saturating_add(1),
        consecutive,
        start_boundary,
    })
}

fn is_boundary_char(ch: char) -> bool {
    matches!(ch, '/' | ':' | '-' | '_' | ' ')
}

#[cfg(test)]
mod tests {
    use super::{search_nodes, NodeMatch, SearchMode};
    use crate::model::fixtures::{canvas_three_step_funnel, content_sample, nid};
    use crate::model::{Canvas, Node, NodeKind, Position};

    fn hit_ids(hits: &[NodeMatch]) -> Vec<String> {
        hits.iter()
            .map(|hit| hit.node_id().as_str().to_owned())
            .collect()
    }

    fn fixture_canvas() -> Canvas {
        let mut canvas = canvas_three_step_funnel();
        canvas
            .node_mut(&nid("n1"))
            .expect("fixture node")
            .set_content(Some(content_sample()));
        canvas
    }

    #[test]
    fn substring_search_covers_labels_and_content_in_canvas_order() {
        let canvas = fixture_canvas();

        let hits =
            search_nodes(&canvas, "Página", SearchMode::Substring, false).expect("search result");
        assert_eq!(hit_ids(&hits), vec!["n1", "n2"]);

        // "Pixel instalado" only exists inside n1's checklist.
        let hits =
            search_nodes(&canvas, "Pixel", SearchMode::Substring, false).expect("search result");
        assert_eq!(hit_ids(&hits), vec!["n1"]);
    }

    #[test]
    fn substring_search_can_be_case_insensitive() {
        let canvas = fixture_canvas();

        let hits =
            search_nodes(&canvas, "página", SearchMode::Substring, true).expect("search result");
        assert_eq!(hit_ids(&hits), vec!["n1", "n2"]);

        let hits =
            search_nodes(&canvas, "página", SearchMode::Substring, false).expect("search result");
        assert!(hits.is_empty());
    }

    #[test]
    fn regex_search_matches_whole_haystack_lines() {
        let canvas = fixture_canvas();

        let hits =
            search_nodes(&canvas, "^checkout$", SearchMode::Regex, true).expect("search result");
        assert_eq!(hit_ids(&hits), vec!["n3"]);
    }

    #[test]
    fn regex_search_surfaces_compile_errors() {
        let canvas = fixture_canvas();

        let err = search_nodes(&canvas, "(", SearchMode::Regex, true)
            .expect_err("expected regex compile error");
        let msg = err.to_string();
        assert!(!msg.is_empty());
        assert!(msg.to_lowercase().contains("regex"));
    }

    #[test]
    fn fuzzy_search_ranks_closer_matches_first() {
        let mut canvas = Canvas::new();
        let mut node = Node::new(nid("n1"), NodeKind::SalesPage, Position::default());
        node.set_label("funil de captura");
        canvas.nodes_mut().insert(nid("n1"), node);
        let mut node = Node::new(nid("n2"), NodeKind::CapturePage, Position::default());
        node.set_label("captura");
        canvas.nodes_mut().insert(nid("n2"), node);

        let hits = search_nodes(&canvas, "captura", SearchMode::Fuzzy, true).expect("search result");

        assert_eq!(hit_ids(&hits), vec!["n2", "n1"]);
        assert!(hits[0].score() > hits[1].score());
    }

    #[test]
    fn fuzzy_search_drops_non_subsequence_noise() {
        let canvas = fixture_canvas();

        let hits = search_nodes(&canvas, "zzz", SearchMode::Fuzzy, true).expect("search result");
        assert!(hits.is_empty());
    }

    #[test]
    fn blank_needle_matches_nothing() {
        let canvas = fixture_canvas();

        for mode in [SearchMode::Substring, SearchMode::Regex, SearchMode::Fuzzy] {
            let hits = search_nodes(&canvas, "   ", mode, true).expect("search result");
            assert!(hits.is_empty());
        }
    }
}
