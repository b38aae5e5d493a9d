//! Binding to the page-global Chart.js constructor and the create-once,
//! update-thereafter doughnut handles the calculators own.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::NodeRef;

/// Slice colors shared by the growth charts; the loan chart reverses
/// them so the principal reads as the accented slice.
pub const MUTED_SLICE: &str = "#2d3748";
pub const ACCENT_SLICE: &str = "#4299e1";

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Chart;

    #[wasm_bindgen(method)]
    fn update(this: &Chart);
}

/// One chart per calculator, held in a `use_mut_ref` slot and never
/// shared between calculators.
pub type ChartSlot = Rc<RefCell<Option<DoughnutChart>>>;

pub struct DoughnutChart {
    inner: Chart,
}

impl DoughnutChart {
    fn create(
        canvas: &HtmlCanvasElement,
        labels: [&str; 2],
        colors: [&str; 2],
        slices: [f64; 2],
    ) -> Option<DoughnutChart> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let config = doughnut_config(labels, colors, slices);
        Some(DoughnutChart {
            inner: Chart::new(&ctx, &config),
        })
    }

    /// Swap the bound data array in place and re-render. The chart
    /// instance survives, so its animation state is not reset.
    fn set_slices(&self, slices: [f64; 2]) {
        let next = Array::of2(&JsValue::from_f64(slices[0]), &JsValue::from_f64(slices[1]));
        if let Ok(data) = Reflect::get(self.inner.as_ref(), &JsValue::from_str("data")) {
            if let Ok(datasets) = Reflect::get(&data, &JsValue::from_str("datasets")) {
                let first = Array::from(&datasets).get(0);
                let _ = Reflect::set(&first, &JsValue::from_str("data"), &next);
            }
        }
        self.inner.update();
    }
}

/// Create the chart on the first computation, mutate it afterwards.
pub fn upsert_doughnut(
    slot: &ChartSlot,
    canvas_ref: &NodeRef,
    labels: [&str; 2],
    colors: [&str; 2],
    slices: [f64; 2],
) {
    let mut slot = slot.borrow_mut();
    if let Some(chart) = slot.as_ref() {
        chart.set_slices(slices);
    } else if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
        *slot = DoughnutChart::create(&canvas, labels, colors, slices);
    }
}

/// Chart.js global text and border defaults. A no-op when the library
/// has not been loaded.
pub fn apply_global_defaults() {
    let chart_class = match Reflect::get(&js_sys::global(), &JsValue::from_str("Chart")) {
        Ok(c) if !c.is_undefined() => c,
        _ => return,
    };
    if let Ok(defaults) = Reflect::get(&chart_class, &JsValue::from_str("defaults")) {
        let _ = Reflect::set(
            &defaults,
            &JsValue::from_str("color"),
            &JsValue::from_str("#a0a0a0"),
        );
        let _ = Reflect::set(
            &defaults,
            &JsValue::from_str("borderColor"),
            &JsValue::from_str("rgba(255, 255, 255, 0.1)"),
        );
    }
}

fn doughnut_config(labels: [&str; 2], colors: [&str; 2], slices: [f64; 2]) -> JsValue {
    let dataset = Object::new();
    set(
        &dataset,
        "data",
        &Array::of2(&JsValue::from_f64(slices[0]), &JsValue::from_f64(slices[1])),
    );
    set(
        &dataset,
        "backgroundColor",
        &Array::of2(&JsValue::from_str(colors[0]), &JsValue::from_str(colors[1])),
    );
    set(&dataset, "borderWidth", &JsValue::from_f64(0.0));

    let data = Object::new();
    set(
        &data,
        "labels",
        &Array::of2(&JsValue::from_str(labels[0]), &JsValue::from_str(labels[1])),
    );
    set(&data, "datasets", &Array::of1(&dataset));

    let animation = Object::new();
    set(&animation, "animateScale", &JsValue::from_bool(true));

    let options = Object::new();
    set(&options, "responsive", &JsValue::from_bool(true));
    set(&options, "maintainAspectRatio", &JsValue::from_bool(false));
    set(&options, "animation", &animation);

    let config = Object::new();
    set(&config, "type", &JsValue::from_str("doughnut"));
    set(&config, "data", &data);
    set(&config, "options", &options);
    config.into()
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}
