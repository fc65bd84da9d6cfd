use crate::generator::profile::{build_frame_sequence, GeneratorConfig};
use crate::gui_bridge::model::SessionModel;
use crate::workflow::runner::Runner;
use anyhow::Result;
use fitcore::pose_interface::PoseFrame;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Bridge hosting the HTTP endpoint a presentation layer talks to: poll the
/// session model, or push landmark frames / generator configs for analysis.
pub struct GuiBridge {
    state: Arc<RwLock<SessionModel>>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(SessionModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("summary")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<SessionModel>>| warp::reply::json(&*state.read().unwrap()));

        let ingest_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |frames: Vec<PoseFrame>,
                 state: Arc<RwLock<SessionModel>>,
                 runner: Arc<Runner>| async move {
                    match runner.execute(&frames) {
                        Ok(outcome) => {
                            let mut guard = state.write().unwrap();
                            *guard = SessionModel::from_outcome(&outcome);
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "reps": outcome.summary.reps,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let generator_route = warp::path("ingest-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |config: GeneratorConfig,
                 state: Arc<RwLock<SessionModel>>,
                 runner: Arc<Runner>| async move {
                    match build_frame_sequence(&config)
                        .and_then(|frames| runner.execute(&frames))
                    {
                        Ok(outcome) => {
                            let mut guard = state.write().unwrap();
                            *guard = SessionModel::from_outcome(&outcome);
                            if let Some(name) = config.scenario.as_ref() {
                                println!(
                                    "[GUI] Scenario {} -> {} reps",
                                    name, outcome.summary.reps
                                );
                            }
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "reps": outcome.summary.reps,
                                    "description": config.description.clone().unwrap_or_default()
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest-config error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(ingest_route).or(generator_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bridge_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &SessionModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!("[GUI] {} (reps: {})", guard.status_text, guard.reps);
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> SessionModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_session_frames;
    use crate::workflow::config::SessionConfig;
    use fitcore::pose_interface::ExerciseKind;
    use std::sync::Arc;

    #[test]
    fn bridge_state_follows_published_outcomes() {
        let config = SessionConfig::from_args("jumping_jacks", 3, 15.0);
        let runner = Arc::new(Runner::new(config));
        let bridge = GuiBridge::new(runner.clone());

        let frames = build_session_frames(ExerciseKind::JumpingJacks, 3).unwrap();
        let outcome = runner.execute(&frames).unwrap();
        bridge
            .publish(&SessionModel::from_outcome(&outcome))
            .unwrap();

        let snapshot = bridge.snapshot();
        assert_eq!(snapshot.reps, 3);
        assert!(snapshot.summary.is_some());
    }
}
