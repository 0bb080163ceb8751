use folio_motion::api::{
    CountingScheduler, FixedEnvironment, FrameStatus, ProgressAnimator, ProgressAnimatorConfig,
};
use folio_motion::core::{ElementRect, Viewport, steps_to_converge};
use folio_motion::render::RecordingSink;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const USAGE: &str =
    "usage: progress_trace_tool <trace|summary> --input <path> --output <path>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Trace,
    Summary,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioFile {
    trace_name: String,
    viewport: Viewport,
    #[serde(default)]
    progress: ProgressAnimatorConfig,
    #[serde(default)]
    reduced_motion: bool,
    #[serde(default = "default_max_frames")]
    max_frames: usize,
    steps: Vec<GeometryStep>,
}

/// Reference element geometry after one scroll event; `None` means removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct GeometryStep {
    element: Option<ElementRect>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceFile {
    trace_name: String,
    steps: Vec<StepTrace>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StepTrace {
    measured: bool,
    target: f64,
    frames: Vec<f64>,
    settled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SummaryFile {
    trace_name: String,
    smoothing_factor: f64,
    epsilon: f64,
    steps: Vec<StepSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StepSummary {
    target: f64,
    frames: usize,
    predicted_frames: Option<usize>,
    settled: bool,
}

fn default_max_frames() -> usize {
    600
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let scenario: ScenarioFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
    let trace = trace_scenario(&scenario)?;
    match args.command {
        CommandKind::Trace => write_json(&args.output, &trace),
        CommandKind::Summary => write_json(&args.output, &summarize(&scenario, &trace)),
    }
}

fn trace_scenario(scenario: &ScenarioFile) -> Result<TraceFile, String> {
    let mut animator = ProgressAnimator::new(scenario.progress.clone())
        .map_err(|err| format!("invalid progress config: {err}"))?;
    let mut env =
        FixedEnvironment::new(scenario.viewport).with_reduced_motion(scenario.reduced_motion);
    let mut scheduler = CountingScheduler::default();

    let mut steps = Vec::with_capacity(scenario.steps.len());
    for step in &scenario.steps {
        env.reference_rect = step.element;
        let measured = animator.measure(&env, &mut scheduler);

        let mut sink = RecordingSink::default();
        let mut settled = !animator.state().running();
        let mut frames_run = 0;
        while animator.state().running() && frames_run < scenario.max_frames {
            frames_run += 1;
            match animator.tick(&env, &mut scheduler, &mut sink) {
                FrameStatus::Scheduled => {}
                FrameStatus::Settled => {
                    settled = true;
                    break;
                }
                FrameStatus::Skipped => break,
            }
        }

        steps.push(StepTrace {
            measured,
            target: animator.state().target(),
            frames: sink.values_for(&scenario.progress.property),
            settled,
        });
    }

    Ok(TraceFile {
        trace_name: scenario.trace_name.clone(),
        steps,
    })
}

fn summarize(scenario: &ScenarioFile, trace: &TraceFile) -> SummaryFile {
    let config = &scenario.progress;
    let mut displayed = 0.0;
    let steps = trace
        .steps
        .iter()
        .map(|step| {
            let predicted_frames = if scenario.reduced_motion {
                Some(1)
            } else {
                steps_to_converge(step.target - displayed, config.smoothing_factor, config.epsilon)
                    .map(|steps| steps.max(1))
            };
            if let Some(last) = step.frames.last() {
                displayed = *last;
            }
            StepSummary {
                target: step.target,
                frames: step.frames.len(),
                predicted_frames: step.measured.then_some(predicted_frames).flatten(),
                settled: step.settled,
            }
        })
        .collect();

    SummaryFile {
        trace_name: trace.trace_name.clone(),
        smoothing_factor: config.smoothing_factor,
        epsilon: config.epsilon,
        steps,
    }
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("trace") => CommandKind::Trace,
        Some("summary") => CommandKind::Summary,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        command,
        input,
        output,
    })
}
