//! NLP Module Tests
//!
//! Property and scenario tests for normalization, keyword ranking, CLO
//! generation and skill extraction.

use crate::nlp::{
    extract_skills, preprocess, CloGenerator, KeywordExtractor, LanguageResources, Tokenizer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn keywords(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("keyword{:02}", i)).collect()
}

#[cfg(test)]
mod normalizer_tests {
    use super::*;

    #[test]
    fn test_preprocess_idempotent_on_varied_inputs() {
        let inputs = [
            "Machine learning is a field of AI (2024 edition)!",
            "  Tabs\tand\nnewlines\r\n  ",
            "Ünïcödé — dashes – and “quotes”",
            "e-mail: student@uni.edu; grade=A+",
            "42",
        ];

        for input in inputs {
            let once = preprocess(input);
            assert_eq!(preprocess(&once), once, "input: {:?}", input);
            assert!(!once.starts_with(' ') && !once.ends_with(' '));
            assert!(!once.contains("  "));
            assert!(!once.chars().any(|c| c.is_ascii_digit()));
        }
    }
}

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_scenario_machine_learning() {
        let words = [
            "machine", "machine", "learning", "learning", "learning", "data", "science",
        ];
        let result = KeywordExtractor::default().extract_keywords(&words, 3);
        assert_eq!(result, vec!["learning", "machine", "data"]);
    }

    #[test]
    fn test_keyword_invariants() {
        let resources = LanguageResources::english();
        let text = preprocess(
            "Compilers translate source programs. A compiler has a lexer, a parser, \
             an optimizer and a code generator. The parser builds a syntax tree; the \
             optimizer rewrites the tree; the generator emits code for the target.",
        );
        let words = Tokenizer::new(&resources).tokenize(&text).words;
        let extractor = KeywordExtractor::default();

        for top_n in [0, 1, 3, 5, 100] {
            let ranked = extractor.rank(&words);
            let result = extractor.extract_keywords(&words, top_n);

            assert!(result.len() <= top_n);
            assert!(result.iter().all(|w| w.chars().count() > 3));

            let freqs: Vec<usize> = result
                .iter()
                .map(|w| ranked.iter().find(|k| &k.word == w).unwrap().frequency)
                .collect();
            assert!(freqs.windows(2).all(|pair| pair[0] >= pair[1]));
        }
    }
}

#[cfg(test)]
mod clo_tests {
    use super::*;

    #[test]
    fn test_clo_count_formula() {
        let generator = CloGenerator::new();
        let mut rng = StdRng::seed_from_u64(11);

        for len in [0usize, 1, 4, 5, 6, 12, 25, 26, 60] {
            for num_clos in [0usize, 1, 3, 5, 10] {
                let kws = keywords(len);
                let clos = generator.generate_clos(&kws, num_clos, &mut rng);
                let considered = len.min(num_clos * 5);
                let expected = num_clos.min(considered.div_ceil(5));

                assert_eq!(clos.len(), expected, "len={} num_clos={}", len, num_clos);
                assert!(clos.iter().all(|c| !c.keywords.is_empty()));
                assert!(clos.iter().all(|c| c.keywords.len() <= 5));
            }
        }
    }

    #[test]
    fn test_scenario_alpha_to_zeta() {
        let kws = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
        let clos = CloGenerator::new().generate_clos(&kws, 2, &mut StdRng::seed_from_u64(5));

        assert_eq!(clos.len(), 2);
        assert_eq!(clos[0].main_keyword(), "alpha");
        assert_eq!(clos[1].keywords, vec!["zeta"]);
        assert_eq!(clos[1].supporting_keywords(), "related concepts");
    }

    #[test]
    fn test_groups_are_consecutive() {
        let kws = keywords(12);
        let clos = CloGenerator::new().generate_clos(&kws, 10, &mut StdRng::seed_from_u64(5));

        let flattened: Vec<String> = clos.iter().flat_map(|c| c.keywords.clone()).collect();
        assert_eq!(flattened, kws);
    }

    #[test]
    fn test_different_seeds_vary_output() {
        let kws = keywords(50);
        let generator = CloGenerator::new();

        let outputs: Vec<Vec<String>> = (0..8)
            .map(|seed| {
                generator
                    .generate_clos(&kws, 10, &mut StdRng::seed_from_u64(seed))
                    .into_iter()
                    .map(|c| c.statement)
                    .collect()
            })
            .collect();

        assert!(outputs.iter().any(|o| o != &outputs[0]));
    }
}

#[cfg(test)]
mod skill_tests {
    use super::*;

    #[test]
    fn test_skill_count_bound() {
        let generator = CloGenerator::new();
        let mut rng = StdRng::seed_from_u64(9);

        for len in [0usize, 3, 10, 30] {
            for num_skills in [0usize, 5, 10, 15] {
                let kws = keywords(len);
                let clos = generator.generate_clos(&kws, 5, &mut rng);
                let skills = extract_skills(&kws, &clos, num_skills);

                assert!(skills.len() <= num_skills);
                assert_eq!(skills.len(), num_skills.min(len));
            }
        }
    }

    #[test]
    fn test_no_reuse_when_enough_remaining() {
        let kws = keywords(30);
        let clos = CloGenerator::new().generate_clos(&kws, 3, &mut StdRng::seed_from_u64(2));
        let used: Vec<&String> = clos.iter().flat_map(|c| c.keywords.iter()).collect();

        // 30 - 15 used >= 10 requested
        let skills = extract_skills(&kws, &clos, 10);
        assert_eq!(skills.len(), 10);
        for skill in &skills {
            let keyword = skill.rsplit(' ').next().unwrap();
            assert!(!used.iter().any(|u| u.as_str() == keyword), "{}", skill);
        }
        assert_eq!(skills[0], "Proficiency in keyword15");
    }

    #[test]
    fn test_empty_keywords_scenario() {
        let kws: Vec<String> = Vec::new();
        let clos = CloGenerator::new().generate_clos(&kws, 5, &mut StdRng::seed_from_u64(0));
        assert!(clos.is_empty());
        assert!(extract_skills(&kws, &clos, 10).is_empty());
    }
}
