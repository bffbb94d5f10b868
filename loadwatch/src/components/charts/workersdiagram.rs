use leptos::{prelude::*, svg};
use wasm_bindgen::JsCast;
use workerlog::{row_labels, Worker};

use super::{
    axis::Axis,
    scale::{BandScale, TimeScale},
    workeritem::WorkerItem,
};

const BAND_PADDING: f64 = 0.2;

/// One drawable rectangle derived from a worker record and the two scales.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WorkerBar {
    pub class: Option<&'static str>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WorkerBar {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.x, self.y)
    }
}

/// Build the horizontal time scale and vertical row-band scale for a record
/// collection. The time domain is taken from the first record's start and the
/// last record's end, so feeds are expected to arrive ordered by time; an
/// unsorted feed narrows the domain and out-of-domain bars clamp to its
/// edges.
///
/// # Panics
///
/// Panics if `workers` is empty.
pub(crate) fn diagram_scales(
    workers: &[Worker],
    plot_width: f64,
    plot_height: f64,
) -> (TimeScale, BandScale) {
    let time_domain = (workers[0].start, workers[workers.len() - 1].end);
    let x = TimeScale::new(time_domain, (0.0, plot_width));
    let y = BandScale::new(row_labels(workers), (0.0, plot_height), BAND_PADDING);
    (x, y)
}

fn worker_bar(worker: &Worker, x: &TimeScale, y: &BandScale, left_margin: f64) -> WorkerBar {
    let x0 = x.scale(worker.start);
    let x1 = x.scale(worker.end);
    WorkerBar {
        class: worker.status.bar_class(),
        x: 1.0 + left_margin + x0,
        // Rows outside the band domain fall back to the top of the plot.
        y: y.scale(&worker.task_name.to_string()).unwrap_or(0.0),
        // The 1px floor keeps zero-duration intervals visible.
        width: (x1 - x0).max(1.0),
        height: y.bandwidth(),
    }
}

pub(crate) fn worker_bars(
    workers: &[Worker],
    x: &TimeScale,
    y: &BandScale,
    left_margin: f64,
) -> Vec<WorkerBar> {
    workers
        .iter()
        .map(|w| worker_bar(w, x, y, left_margin))
        .collect()
}

#[allow(non_snake_case)]
#[component]
pub fn WorkersDiagram(
    initial_workers: Vec<Worker>,
    #[prop(default = 1200)] width: u32,
    #[prop(default = 400)] height: u32,
    #[prop(default = (20, 20, 20, 20))] margin: (u32, u32, u32, u32), // top, right, bottom, left
) -> impl IntoView {
    let plot_height = (height - margin.0 - margin.2) as f64;
    let (x, y) = diagram_scales(&initial_workers, width as f64, plot_height);
    let x_axis = Axis::time_bottom(&x);
    let y_axis = Axis::band_left(&y);
    let bars = worker_bars(&initial_workers, &x, &y, margin.3 as f64);

    let x_axis_ref = NodeRef::<svg::G>::new();
    let y_axis_ref = NodeRef::<svg::G>::new();

    // Axis ticks are bound imperatively into the two mount points. Each run
    // fully overwrites the previous contents, so there is no teardown.
    let x_markup = x_axis.to_svg();
    let y_markup = y_axis.to_svg();
    Effect::new(move |_| {
        if let Some(g) = x_axis_ref.get() {
            let g: web_sys::Element = g.unchecked_into();
            g.set_inner_html(&x_markup);
        }
    });
    Effect::new(move |_| {
        if let Some(g) = y_axis_ref.get() {
            let g: web_sys::Element = g.unchecked_into();
            g.set_inner_html(&y_markup);
        }
    });

    let items = bars
        .iter()
        .map(|bar| {
            view! {
                <WorkerItem
                    class=bar.class
                    transform=bar.transform()
                    width=bar.width
                    height=bar.height
                />
            }
        })
        .collect_view();

    view! {
        <svg
            class="dg"
            id="diagram"
            role="graphics-document"
            width=(width + margin.3 + margin.1).to_string()
            height=(height + margin.0 + margin.2).to_string()
        >
            <g id="axes">
                <g
                    node_ref=x_axis_ref
                    id="x-axis"
                    class="axis"
                    transform=format!("translate({}, {})", margin.3, height - margin.2)
                    aria-label="x-axis"
                ></g>
                <g
                    node_ref=y_axis_ref
                    id="y-axis"
                    class="axis"
                    transform=format!("translate({}, 0)", margin.3)
                    aria-label="y-axis"
                ></g>
            </g>
            <g id="dg-workers" class="dg-workers">{items}</g>
        </svg>
    }
}
