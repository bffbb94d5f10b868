use leptos::prelude::*;
use workerlog::WorkerFile;

use crate::components::{card::Card, charts::workersdiagram::WorkersDiagram};

#[allow(non_snake_case)]
#[component]
pub fn Workers() -> impl IntoView {
    let file = WorkerFile::from_json(include_str!("workers.json"))
        .expect("failed to parse workers.json");
    tracing::info!("loaded {} worker records", file.workers.len());
    view! {
        <div class="workers-container">
            <Card class="p-3 m-2">
                <WorkersDiagram initial_workers=file.workers />
            </Card>
        </div>
    }
}
