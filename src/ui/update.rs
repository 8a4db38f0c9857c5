use crate::sort::{Algorithm, Highlight};
use crate::ui::model::{Model, Phase, RunSummary, SortRun};
use std::time::Instant;
use tracing::{debug, info};

pub fn handle_update(m: &mut Model, msg: crate::ui::Msg) {
    match msg {
        crate::ui::Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        crate::ui::Msg::KeyEsc => handle_key_esc(m),
        crate::ui::Msg::Rune(r) => handle_rune(m, r),
        crate::ui::Msg::Tick => handle_tick(m),
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.screen_height = height;
}

fn handle_rune(m: &mut Model, r: char) {
    if r.eq_ignore_ascii_case(&'r') {
        shuffle(m);
        return;
    }
    let Some(algorithm) = Algorithm::from_key(r) else {
        return;
    };
    if m.is_sorting() {
        debug!(requested = algorithm.name(), "sort already running, key ignored");
        return;
    }
    start_sort(m, algorithm);
}

// Esc stops whatever is animating; the array keeps its current order.
// A cancelled reveal leaves a sorted array, so only a cancelled sort
// drops the timer.
fn handle_key_esc(m: &mut Model) {
    if cancel_sort(m, "sort cancelled") {
        m.elapsed = None;
    }
    m.phase = Phase::Idle;
    m.highlight = Highlight::NONE;
}

fn shuffle(m: &mut Model) {
    cancel_sort(m, "sort cancelled by shuffle");
    m.phase = Phase::Idle;
    m.array.shuffle(&mut m.rng);
    m.highlight = Highlight::NONE;
    m.elapsed = None;
    debug!(len = m.array.len(), "array shuffled");
}

// Hand the slice back to a running sorter so it can write back any value it
// holds outside it. Returns whether a sort was running.
fn cancel_sort(m: &mut Model, reason: &str) -> bool {
    let Phase::Sorting(run) = &mut m.phase else {
        return false;
    };
    run.sorter.cancel(m.array.values_mut());
    info!(
        algorithm = run.algorithm.name(),
        steps = run.steps,
        "{reason}"
    );
    true
}

fn start_sort(m: &mut Model, algorithm: Algorithm) {
    info!(algorithm = algorithm.name(), len = m.array.len(), "sort started");
    m.array.clear_sorted();
    m.highlight = Highlight::NONE;
    m.elapsed = Some(0.0);
    m.phase = Phase::Sorting(SortRun {
        algorithm,
        sorter: algorithm.sorter(m.array.len()),
        started: Instant::now(),
        steps: 0,
    });
}

fn handle_tick(m: &mut Model) {
    let finished = match &mut m.phase {
        Phase::Sorting(run) => match run.sorter.step(m.array.values_mut()) {
            Some(h) => {
                run.steps += 1;
                m.highlight = h;
                m.elapsed = Some(run.started.elapsed().as_secs_f64());
                None
            }
            None => Some(RunSummary {
                algorithm: run.algorithm,
                steps: run.steps,
                elapsed: run.started.elapsed().as_secs_f64(),
            }),
        },
        Phase::Revealing { revealed } => {
            *revealed += 1;
            if *revealed >= m.array.len() {
                m.phase = Phase::Idle;
            }
            None
        }
        Phase::Idle => None,
    };
    if let Some(summary) = finished {
        finish_sort(m, summary);
    }
}

fn finish_sort(m: &mut Model, summary: RunSummary) {
    info!(
        algorithm = summary.algorithm.name(),
        steps = summary.steps,
        "Elapsed time {:0.2} seconds",
        summary.elapsed
    );
    m.array.mark_sorted();
    m.highlight = Highlight::NONE;
    m.elapsed = Some(summary.elapsed);
    m.last_run = Some(summary);
    m.phase = Phase::Revealing { revealed: 0 };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ArrayModel;
    use crate::config::Config;
    use crate::ui::Msg;
    use crate::ui::model::initial_model_with_rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn model_with(values: Vec<u32>) -> Model {
        let mut m = initial_model_with_rng(Config::default(), StdRng::seed_from_u64(21));
        m.array = ArrayModel::from_values(&m.config, values);
        m
    }

    // Tick until the model is idle again, returning how many ticks it took.
    fn run_until_idle(m: &mut Model) -> usize {
        let mut ticks = 0;
        while m.is_busy() {
            m.update(Msg::Tick);
            ticks += 1;
            assert!(ticks < 1_000_000, "animation never finished");
        }
        ticks
    }

    #[test]
    fn each_key_sorts_and_reveals() {
        for key in ['b', 'i', 'm', 'q', 'B', 'Q'] {
            let mut m = model_with(vec![5, 3, 8, 1, 9, 2, 7]);
            m.update(Msg::Rune(key));
            assert!(m.is_sorting(), "{key} did not start a sort");
            run_until_idle(&mut m);
            assert_eq!(m.array.values(), &[1, 2, 3, 5, 7, 8, 9], "key {key}");
            assert!(m.array.is_sorted());
            assert_eq!(m.mode(), "sorted");
            assert!(m.elapsed.is_some());
            let summary = m.last_run.expect("summary recorded");
            assert_eq!(Some(summary.algorithm), Algorithm::from_key(key));
        }
    }

    #[test]
    fn every_sort_step_is_one_tick() {
        let mut m = model_with(vec![5, 3, 8, 1]);
        m.update(Msg::Rune('b'));
        m.update(Msg::Tick);
        assert_eq!(m.highlight, Highlight::pair(0, 1));
        assert_eq!(m.array.values(), &[3, 5, 8, 1]);
        m.update(Msg::Tick);
        assert_eq!(m.highlight, Highlight::pair(1, 2));
        assert_eq!(m.steps(), Some((Algorithm::Bubble, 2)));
    }

    #[test]
    fn reveal_takes_one_tick_per_bar() {
        let mut m = model_with(vec![2, 1, 3]);
        m.update(Msg::Rune('b'));
        // 3 comparisons, one finishing tick
        for _ in 0..4 {
            m.update(Msg::Tick);
        }
        assert!(matches!(m.phase, Phase::Revealing { revealed: 0 }));
        assert!(m.array.is_sorted());
        assert_eq!(run_until_idle(&mut m), 3);
    }

    #[test]
    fn shuffle_cancels_and_clears_state() {
        let mut m = model_with((1..=20).collect());
        m.update(Msg::Rune('m'));
        for _ in 0..5 {
            m.update(Msg::Tick);
        }
        m.update(Msg::Rune('r'));
        assert!(!m.is_busy());
        assert!(!m.array.is_sorted());
        assert_eq!(m.elapsed, None);
        assert_eq!(m.highlight, Highlight::NONE);
        let mut v = m.array.values().to_vec();
        v.sort_unstable();
        assert_eq!(v, (1..=20).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_after_sort_unmarks_sorted() {
        let mut m = model_with(vec![3, 2, 1]);
        m.update(Msg::Rune('i'));
        run_until_idle(&mut m);
        assert!(m.array.is_sorted());
        m.update(Msg::Rune('r'));
        assert!(!m.array.is_sorted());
        assert_eq!(m.mode(), "idle");
    }

    #[test]
    fn esc_cancels_a_running_sort() {
        let mut m = model_with(vec![4, 3, 2, 1]);
        m.update(Msg::Rune('q'));
        m.update(Msg::Tick);
        assert!(m.elapsed.is_some());
        m.update(Msg::KeyEsc);
        assert!(!m.is_busy());
        assert!(!m.array.is_sorted());
        assert_eq!(m.last_run, None);
        assert_eq!(m.elapsed, None);
        assert_eq!(m.mode(), "idle");
    }

    #[test]
    fn esc_during_reveal_keeps_the_timer() {
        let mut m = model_with(vec![2, 1]);
        m.update(Msg::Rune('b'));
        m.update(Msg::Tick);
        m.update(Msg::Tick);
        assert!(matches!(m.phase, Phase::Revealing { .. }));
        m.update(Msg::KeyEsc);
        assert!(!m.is_busy());
        assert!(m.array.is_sorted());
        assert!(m.elapsed.is_some());
    }

    #[test]
    fn esc_mid_merge_keeps_every_value() {
        let mut m = model_with(vec![2, 1]);
        m.update(Msg::Rune('m'));
        // two boundary frames, then the first merge write
        for _ in 0..3 {
            m.update(Msg::Tick);
        }
        m.update(Msg::KeyEsc);
        assert_eq!(m.array.values(), &[1, 2]);
    }

    #[test]
    fn shuffle_mid_insertion_shift_keeps_every_value() {
        let mut m = model_with(vec![5, 1]);
        m.update(Msg::Rune('i'));
        m.update(Msg::Tick);
        m.update(Msg::Tick);
        assert_eq!(m.array.values(), &[5, 5]);
        m.update(Msg::Rune('r'));
        let mut v = m.array.values().to_vec();
        v.sort_unstable();
        assert_eq!(v, vec![1, 5]);
    }

    #[test]
    fn cancel_keeps_values_for_every_algorithm_and_step() {
        let input = vec![9, 2, 7, 2, 5, 1, 8, 3];
        let mut expect = input.clone();
        expect.sort_unstable();
        for key in ['b', 'i', 'm', 'q'] {
            for ticks in 0..40 {
                for cancel in [Msg::KeyEsc, Msg::Rune('r')] {
                    let mut m = model_with(input.clone());
                    m.update(Msg::Rune(key));
                    for _ in 0..ticks {
                        m.update(Msg::Tick);
                    }
                    m.update(cancel);
                    let mut v = m.array.values().to_vec();
                    v.sort_unstable();
                    assert_eq!(v, expect, "key {key} after {ticks} ticks");
                }
            }
        }
    }

    #[test]
    fn sort_keys_are_ignored_while_sorting() {
        let mut m = model_with(vec![4, 3, 2, 1]);
        m.update(Msg::Rune('b'));
        m.update(Msg::Tick);
        m.update(Msg::Rune('q'));
        assert_eq!(m.steps(), Some((Algorithm::Bubble, 1)));
    }

    #[test]
    fn sort_key_during_reveal_starts_new_sort() {
        let mut m = model_with(vec![2, 1]);
        m.update(Msg::Rune('b'));
        m.update(Msg::Tick);
        m.update(Msg::Tick);
        assert!(matches!(m.phase, Phase::Revealing { .. }));
        m.update(Msg::Rune('m'));
        assert!(m.is_sorting());
        assert!(!m.array.is_sorted());
    }

    #[test]
    fn sorting_an_empty_array_is_a_no_op() {
        let mut m = model_with(Vec::new());
        for key in ['b', 'i', 'm', 'q'] {
            m.update(Msg::Rune(key));
            run_until_idle(&mut m);
            assert!(m.array.is_empty());
            assert_eq!(m.steps(), Some((Algorithm::from_key(key).unwrap(), 0)));
        }
        // rendering the empty model must not panic either
        let _ = m.render_full();
    }

    #[test]
    fn other_keys_do_nothing() {
        let mut m = model_with(vec![2, 1]);
        m.update(Msg::Rune('x'));
        assert!(!m.is_busy());
        m.update(Msg::Tick);
        assert_eq!(m.array.values(), &[2, 1]);
    }

    #[test]
    fn window_size_is_recorded() {
        let mut m = model_with(vec![1]);
        m.update(Msg::WindowSize {
            width: 120,
            height: 40,
        });
        assert_eq!((m.screen_width, m.screen_height), (120, 40));
    }
}
