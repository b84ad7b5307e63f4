use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_duel::game_state::chess_rules::RuleSet;
use plum_duel::game_state::chess_types::{Board, Color};
use plum_duel::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_duel::move_generation::move_generator::MoveGenerator;
use plum_duel::search::board_scoring::MaterialScorer;
use plum_duel::search::minimax::{alpha_beta, minimax, SCORE_INFINITY};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    rows: [&'static str; 8],
    side: Color,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        rows: [
            "rnbqkbnr", "pppppppp", "        ", "        ", "        ", "        ", "PPPPPPPP",
            "RNBQKBNR",
        ],
        side: Color::White,
    },
    BenchCase {
        name: "open_middlegame",
        rows: [
            "r   k  r", "ppp  ppp", "  n  q  ", "   pp   ", "  B P   ", "  N  N  ", "PPP  PPP",
            "R  QK  R",
        ],
        side: Color::Black,
    },
];

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = Board::from_rows(&case.rows).expect("benchmark board should parse");
        let rule_sets = [
            ("standard", RuleSet::standard()),
            ("faithful", RuleSet::faithful()),
        ];
        for (label, rules) in rule_sets {
            let gen = LegalMoveGenerator::new(rules);
            group.bench_with_input(BenchmarkId::new(case.name, label), &board, |b, board| {
                b.iter(|| black_box(gen.generate_moves(black_box(board), case.side)))
            });
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_depth_2");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    let gen = LegalMoveGenerator::default();
    for case in CASES {
        let board = Board::from_rows(&case.rows).expect("benchmark board should parse");

        let pruned = alpha_beta(
            &board,
            &gen,
            &MaterialScorer,
            2,
            case.side,
            -SCORE_INFINITY,
            SCORE_INFINITY,
        );
        let full = minimax(&board, &gen, &MaterialScorer, 2, case.side);
        assert_eq!(
            pruned.best_score, full.best_score,
            "pruning changed the score for {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::new("alpha_beta", case.name), &board, |b, board| {
            b.iter(|| {
                let result = alpha_beta(
                    black_box(board),
                    &gen,
                    &MaterialScorer,
                    2,
                    case.side,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                );
                black_box(result.best_score)
            });
        });
        group.bench_with_input(BenchmarkId::new("minimax", case.name), &board, |b, board| {
            b.iter(|| {
                let result = minimax(black_box(board), &gen, &MaterialScorer, 2, case.side);
                black_box(result.best_score)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_move_generation, bench_search);
criterion_main!(search_benches);
