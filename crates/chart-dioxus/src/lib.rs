// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus desktop front end hosting an interactive chart-core Chart (desktop only).
// Notes:
// - UI deps stay behind the `desktop` feature; the input glue in `input` builds everywhere.
// - The scene is embedded as svg markup and every pointer event goes through `Chart::handle`.

pub mod input;

pub use input::{pending_reset, viewport_from_logical, HostClock, PointerMapper};

#[cfg(feature = "desktop")]
pub use ui::run_demo_ui;

#[cfg(feature = "desktop")]
pub mod ui {
    use chart_core::{Chart, ChartConfig, ChartEvent, Point, PointerButton, Response};
    use dioxus::html::input_data::MouseButton;
    use dioxus::prelude::*;
    use dioxus_desktop::tao::event::{Event as WryEvent, WindowEvent};
    use dioxus_desktop::{use_window, use_wry_event_handler};
    use tracing::{debug, warn};

    use crate::input::{pending_reset, viewport_from_logical, HostClock, PointerMapper};

    fn to_button(button: Option<MouseButton>) -> PointerButton {
        match button {
            Some(MouseButton::Primary) => PointerButton::Primary,
            Some(MouseButton::Secondary) => PointerButton::Secondary,
            _ => PointerButton::Auxiliary,
        }
    }

    fn client_point(evt: &MouseEvent) -> Point {
        let c = evt.client_coordinates();
        Point::new(c.x, c.y)
    }

    /// Draggable (and optionally brushable) chart filling the window, with the
    /// readout rows underneath.
    #[component]
    pub fn InteractiveChart(config: ChartConfig) -> Element {
        let window = use_window();
        let clock = use_hook(HostClock::start);
        let mut mapper = use_signal(PointerMapper::default);
        let mut chart = use_signal(|| {
            let scale = window.window.scale_factor();
            let size = window.window.inner_size().to_logical::<f64>(scale);
            Chart::with_random_data(config.clone(), viewport_from_logical(size.width, size.height))
                .map_err(|e| e.to_string())
        });

        use_wry_event_handler(move |event, _| {
            if let WryEvent::WindowEvent { event: WindowEvent::Resized(size), .. } = event {
                let logical = size.to_logical::<f64>(window.window.scale_factor());
                if let Ok(c) = &mut *chart.write() {
                    c.resize(viewport_from_logical(logical.width, logical.height));
                    debug!(width = logical.width, height = logical.height, "window resized");
                }
            }
        });

        let to_plot = move |evt: &MouseEvent| -> Point {
            match &*chart.read() {
                Ok(c) => mapper.read().to_plot(c, client_point(evt)),
                Err(_) => Point::default(),
            }
        };

        let mut dispatch = move |event: ChartEvent| -> Response {
            match &mut *chart.write() {
                Ok(c) => c.handle(event, clock.now()),
                Err(_) => Response::Ignored,
            }
        };

        // a reset cancelled meanwhile makes the late tick a no-op
        let arm_reset = move || {
            let wait = match &*chart.read() {
                Ok(c) => pending_reset(c, clock.now()),
                Err(_) => None,
            };
            if let Some(wait) = wait {
                spawn(async move {
                    tokio::time::sleep(wait).await;
                    if let Ok(c) = &mut *chart.write() {
                        c.tick(clock.now());
                    }
                });
            }
        };

        let (svg, rows) = match &*chart.read() {
            Ok(c) => {
                let theme = c.config().theme();
                let rows: Vec<(String, String)> = c
                    .readout()
                    .rows()
                    .iter()
                    .map(|row| (theme.series_color(row.series).to_css(), row.to_string()))
                    .collect();
                (c.to_svg(), rows)
            }
            Err(e) => return rsx! { div { class: "chart-error", "chart failed to mount: {e}" } },
        };

        rsx! {
            div {
                style: "position:fixed; inset:0; overflow:hidden; user-select:none; font-family:sans-serif;",
                onmousemove: move |evt| {
                    let at = to_plot(&evt);
                    dispatch(ChartEvent::PointerMove { at });
                },
                onmouseup: move |evt| {
                    let at = to_plot(&evt);
                    dispatch(ChartEvent::PointerUp { at });
                    arm_reset();
                },
                oncontextmenu: move |evt| {
                    if dispatch(ChartEvent::ContextMenu) == Response::PreventDefault {
                        evt.prevent_default();
                    }
                },
                div {
                    style: "display:inline-block; line-height:0;",
                    onmounted: move |evt: MountedEvent| async move {
                        match evt.get_client_rect().await {
                            Ok(rect) => mapper.set(PointerMapper::new(Point::new(rect.origin.x, rect.origin.y))),
                            Err(err) => warn!(?err, "chart origin unavailable; using window origin"),
                        }
                    },
                    onmousedown: move |evt| {
                        let at = to_plot(&evt);
                        let target = match &*chart.read() {
                            Ok(c) => c.hit_test(at),
                            Err(_) => None,
                        };
                        let button = to_button(evt.trigger_button());
                        dispatch(ChartEvent::PointerDown { at, button, target });
                    },
                    dangerous_inner_html: "{svg}",
                }
                div { class: "readout", style: "padding:8px 0 0 8px; font-family:monospace;",
                    for (i, (color, line)) in rows.into_iter().enumerate() {
                        p { key: "{i}", style: "margin:2px 0; color:{color};", "{line}" }
                    }
                }
            }
        }
    }

    /// Launch a desktop window hosting one InteractiveChart.
    pub fn run_demo_ui(config: ChartConfig) -> Result<(), String> {
        config.validate().map_err(|e| e.to_string())?;

        #[component]
        fn App() -> Element {
            let config = use_context::<ChartConfig>();
            rsx! { super::ui::InteractiveChart { config } }
        }

        let title = if config.brush { "Brushable chart" } else { "Draggable chart" };
        let cfg = dioxus_desktop::Config::new()
            .with_window(dioxus_desktop::WindowBuilder::new().with_title(title));
        let contexts: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> =
            vec![Box::new(move || Box::new(config.clone()) as Box<dyn std::any::Any>)];
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, contexts, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui(_config: chart_core::ChartConfig) -> Result<(), String> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo".to_string())
}
