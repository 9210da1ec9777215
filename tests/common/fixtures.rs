//! Static log corpora used across harnesses.

/// A small but realistic judge log: submissions for three real teams and one
/// placeholder team, interleaved with unrelated service chatter.
///
/// Expected per-team totals (files `a_example`, `b_small`):
///
/// | Team | Checkpoint totals |
/// |------|-------------------|
/// | `Rustaceans` | 10, 25, 40 |
/// | `Borrowck` | 5, 35 |
/// | `Lifetimes` | — (only a zero score) |
pub const CORPUS_EVENT: &str = "\
2020-03-25T06:58:01.000Z INFO [judge-1] judge starting, 4 workers
2020-03-25T07:01:12.004Z INFO [judge-2] Team 'Rustaceans' scored 10 points on submission #1. InputFileName: a_example
2020-03-25T07:05:00.731Z WARN [judge-2] slow scorer run (2.3s)
2020-03-25T07:10:30.000Z INFO [judge-1] Team 'Borrowck' scored 5 points on submission #2. InputFileName: a_example
2020-03-25T07:30:00.000Z INFO [judge-3] Team 'Rustaceans' scored 15 points on submission #3. InputFileName: b_small
2020-03-25T07:45:00.000Z INFO [judge-1] Team 'test_12344' scored 999 points on submission #4. InputFileName: b_small
2020-03-25T08:00:00.000Z INFO [judge-2] Team 'Rustaceans' scored 8 points on submission #5. InputFileName: a_example
2020-03-25T08:30:00.000Z INFO [judge-3] Team 'Borrowck' scored 30 points on submission #6. InputFileName: b_small
2020-03-25T08:31:00.000Z ERROR [judge-3] submission #7 rejected: output file missing
2020-03-25T09:00:00.000Z INFO [judge-1] Team 'Rustaceans' scored 25 points on submission #8. InputFileName: a_example
2020-03-25T09:15:00.000Z INFO [judge-2] Team 'Lifetimes' scored 0 points on submission #9. InputFileName: a_example
2020-03-26T00:00:00.000Z INFO [judge-1] Team 'Rustaceans' scored 500 points on submission #10. InputFileName: b_small
";

/// Teams in [`CORPUS_EVENT`] that the report keeps, sorted.
pub const CORPUS_EVENT_TEAMS: &[&str] = &["Borrowck", "Lifetimes", "Rustaceans"];

/// Lines that look close to submissions but must never parse.
pub const CORPUS_NEAR_MISSES: &[&str] = &[
    "2020-03-24T10:00:00 Team 'A' scored 5 InputFileName: a_example",
    "2020-03-25 10:00:00 Team 'A' scored 5 InputFileName: a_example",
    "2020-03-25T10:00:00 Team \"A\" scored 5 InputFileName: a_example",
    "2020-03-25T10:00:00 Team 'A' scored -5 InputFileName: a_example",
    "2020-03-25T10:00:00 Team 'A' scored 5 InputFile: a_example",
    "2020-03-25T10:00:00 Team 'A' scored 5 InputFileName: A_EXAMPLE",
    "2020-03-25T10:00:00 Team '' scored 5 InputFileName: a_example",
    "InputFileName: a_example scored 5 Team 'A' 2020-03-25T10:00:00",
];

/// Generate `n` submission lines over `teams` teams and 5 input files, one
/// second apart, with scores that drift upward.
pub fn corpus_high_volume(n: usize, teams: usize) -> String {
    const FILES: &[&str] = &["a_example", "b_small", "c_medium", "d_quite_big", "e_also_big"];
    let mut text = String::with_capacity(n * 120);
    for i in 0..n {
        let secs = 7 * 3600 + i;
        text.push_str(&format!(
            "2020-03-25T{:02}:{:02}:{:02}.000Z INFO [judge] Team 'team-{}' scored {} points. InputFileName: {}\n",
            secs / 3600 % 24,
            secs / 60 % 60,
            secs % 60,
            i % teams,
            (i * 7919) % 10_000 + i,
            FILES[i % FILES.len()],
        ));
    }
    text
}
