//! Pomodoro page: a 25/5 focus timer, kept from the original tree.

use leptos::prelude::*;

#[cfg(test)]
#[path = "pomodoro_test.rs"]
mod pomodoro_test;

const WORK_SECS: u32 = 25 * 60;
const BREAK_SECS: u32 = 5 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Work,
    Break,
}

impl Phase {
    fn duration_secs(self) -> u32 {
        match self {
            Phase::Work => WORK_SECS,
            Phase::Break => BREAK_SECS,
        }
    }

    fn next(self) -> Phase {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Phase::Work => "Focus",
            Phase::Break => "Break",
        }
    }
}

/// One-second step. Hitting zero rolls into the next phase at its full
/// duration; the bool reports the rollover so the session counter can
/// advance.
fn advance(phase: Phase, remaining: u32) -> (Phase, u32, bool) {
    if remaining > 1 {
        (phase, remaining - 1, false)
    } else {
        let next = phase.next();
        (next, next.duration_secs(), true)
    }
}

fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[component]
pub fn PomodoroPage() -> impl IntoView {
    let phase = RwSignal::new(Phase::Work);
    let remaining = RwSignal::new(WORK_SECS);
    let running = RwSignal::new(false);
    let completed = RwSignal::new(0_u32);

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !running.get_untracked() {
                    continue;
                }
                let (next_phase, next_remaining, rolled) =
                    advance(phase.get_untracked(), remaining.get_untracked());
                if rolled && phase.get_untracked() == Phase::Work {
                    completed.update(|n| *n += 1);
                }
                phase.set(next_phase);
                remaining.set(next_remaining);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_toggle = move |_| running.update(|r| *r = !*r);
    let on_reset = move |_| {
        running.set(false);
        phase.set(Phase::Work);
        remaining.set(WORK_SECS);
    };

    view! {
        <div class="pomodoro-page">
            <h1>"Pomodoro"</h1>
            <p class="pomodoro-page__phase">{move || phase.get().label()}</p>
            <p class="pomodoro-page__clock">{move || format_clock(remaining.get())}</p>
            <div class="pomodoro-page__controls">
                <button class="btn btn--primary" on:click=on_toggle>
                    {move || if running.get() { "Pause" } else { "Start" }}
                </button>
                <button class="btn" on:click=on_reset>"Reset"</button>
            </div>
            <p class="pomodoro-page__sessions">
                {move || format!("Completed focus sessions: {}", completed.get())}
            </p>
        </div>
    }
}
