use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, InputEvent};
use yew::prelude::*;

mod chart;
mod finance;
mod format;
mod quiz;
mod rain;
mod theme;

use finance::{GrowthBreakdown, LoanBreakdown, TradeOutcome};
use format::{format_inr, format_percent};
use quiz::RiskProfile;
use theme::Theme;

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Home,
    Calculators,
    Planner,
    Learn,
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    active_page: Page,
    on_select: Callback<Page>,
    theme: Theme,
    on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let nav_open = use_state(|| false);

    let nav_items = [
        ("Home", Page::Home),
        ("Calculators", Page::Calculators),
        ("Goal Planner", Page::Planner),
        ("Learning Hub", Page::Learn),
    ];

    let on_hamburger = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };

    let on_theme_change = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: Event| on_toggle_theme.emit(()))
    };

    html! {
        <header class="site-header">
            <span class="brand">{"NiveshGuru"}</span>
            <nav class={classes!("nav-menu", (*nav_open).then_some("active"))}>
                { for nav_items.into_iter().map(|(label, page)| {
                    let on_select = props.on_select.clone();
                    let nav_open = nav_open.clone();
                    let class = if page == props.active_page { "nav-link active" } else { "nav-link" };
                    html! {
                        <button type="button" class={class} onclick={Callback::from(move |_| {
                            on_select.emit(page);
                            nav_open.set(false);
                        })}>
                            { label }
                        </button>
                    }
                }) }
            </nav>
            <label class="theme-switch" title="Toggle light theme">
                <input
                    type="checkbox"
                    id="checkbox"
                    checked={props.theme == Theme::Light}
                    onchange={on_theme_change}
                />
                <span class="switch-track"></span>
            </label>
            <button
                type="button"
                class={classes!("hamburger", (*nav_open).then_some("active"))}
                onclick={on_hamburger}
            >
                <span class="bar"></span>
                <span class="bar"></span>
                <span class="bar"></span>
            </button>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct HomePageProps {
    theme: Theme,
}

#[function_component(HomePage)]
fn home_page(props: &HomePageProps) -> Html {
    html! {
        <section class="home-hero">
            <RainCanvas theme={props.theme} />
            <div class="hero-copy">
                <h1>{"Learn. Plan. Invest."}</h1>
                <p>{"Free calculators and plain-language lessons for everyday investors."}</p>
            </div>
        </section>
    }
}

struct ResizeEpoch(u32);

impl Reducible for ResizeEpoch {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(ResizeEpoch(self.0 + 1))
    }
}

#[derive(Properties, PartialEq)]
struct RainCanvasProps {
    theme: Theme,
}

#[function_component(RainCanvas)]
fn rain_canvas(props: &RainCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let epoch = use_reducer(|| ResizeEpoch(0));

    {
        let epoch = epoch.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn FnMut()>::new(move || epoch.dispatch(()));
                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                // The previous session is dropped (stopping its timer)
                // before the replacement starts: a hard reset, never two
                // live tickers.
                let session = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(rain::RainAnimation::start);
                move || drop(session)
            },
            (props.theme, epoch.0),
        );
    }

    html! { <canvas id="background-canvas" ref={canvas_ref}></canvas> }
}

#[derive(Properties, PartialEq)]
struct SyncedFieldProps {
    label: &'static str,
    min: f64,
    max: f64,
    step: f64,
    value: String,
    on_change: Callback<String>,
}

/// A numeric field paired with a slider. Slider edits always copy into
/// the field; field edits move the slider only while the parsed value
/// stays inside `[min, max]`, so out-of-range typing keeps the slider
/// where it was without clamping the field.
#[function_component(SyncedField)]
fn synced_field(props: &SyncedFieldProps) -> Html {
    let slider_value = use_state(|| props.value.clone());

    let on_number = {
        let slider_value = slider_value.clone();
        let on_change = props.on_change.clone();
        let (min, max) = (props.min, props.max);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            if let Ok(parsed) = raw.trim().parse::<f64>() {
                if parsed >= min && parsed <= max {
                    slider_value.set(raw.clone());
                }
            }
            on_change.emit(raw);
        })
    };

    let on_slider = {
        let slider_value = slider_value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            slider_value.set(raw.clone());
            on_change.emit(raw);
        })
    };

    html! {
        <div class="input-group">
            <label>{ props.label }</label>
            <input type="number" value={props.value.clone()} oninput={on_number} />
            <input
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={(*slider_value).clone()}
                oninput={on_slider}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NumberFieldProps {
    label: &'static str,
    value: String,
    on_change: Callback<String>,
}

#[function_component(NumberField)]
fn number_field(props: &NumberFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="input-group">
            <label>{ props.label }</label>
            <input type="number" value={props.value.clone()} {oninput} />
        </div>
    }
}

#[function_component(CalculatorsPage)]
fn calculators_page() -> Html {
    html! {
        <div class="calculators-grid">
            <SipCalculator />
            <LumpsumCalculator />
            <LoanCalculator />
            <TradeCalculator />
        </div>
    }
}

#[function_component(SipCalculator)]
fn sip_calculator() -> Html {
    let amount = use_state(|| "5000".to_string());
    let rate = use_state(|| "12".to_string());
    let years = use_state(|| "10".to_string());
    let outcome = use_state(|| None::<GrowthBreakdown>);
    let chart_slot = use_mut_ref(|| None::<chart::DoughnutChart>);
    let canvas_ref = use_node_ref();

    {
        let outcome = outcome.clone();
        let chart_slot = chart_slot.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(amount, rate, years): &(String, String, String)| {
                let next = parse_field(amount)
                    .zip(parse_field(rate))
                    .zip(parse_field(years))
                    .and_then(|((a, r), y)| finance::sip_future_value(a, r, y));
                if let Some(next) = next {
                    chart::upsert_doughnut(
                        &chart_slot,
                        &canvas_ref,
                        ["Invested Amount", "Estimated Returns"],
                        [chart::MUTED_SLICE, chart::ACCENT_SLICE],
                        [next.invested, next.returns],
                    );
                    outcome.set(Some(next));
                }
                || ()
            },
            ((*amount).clone(), (*rate).clone(), (*years).clone()),
        );
    }

    html! {
        <div class="calc-card">
            <h3>{"SIP Calculator"}</h3>
            <SyncedField label="Monthly Investment (₹)" min={500.0} max={100000.0} step={500.0}
                value={(*amount).clone()} on_change={state_setter(&amount)} />
            <SyncedField label="Expected Return Rate (% p.a.)" min={1.0} max={30.0} step={0.5}
                value={(*rate).clone()} on_change={state_setter(&rate)} />
            <SyncedField label="Time Period (Years)" min={1.0} max={40.0} step={1.0}
                value={(*years).clone()} on_change={state_setter(&years)} />
            { match *outcome {
                Some(o) => html! {
                    <div class="calc-results">
                        { result_row("Invested Amount", format_inr(o.invested)) }
                        { result_row("Estimated Returns", format_inr(o.returns)) }
                        { result_row("Total Value", format_inr(o.total)) }
                    </div>
                },
                None => html! {},
            } }
            <div class="chart-wrap"><canvas ref={canvas_ref}></canvas></div>
        </div>
    }
}

#[function_component(LumpsumCalculator)]
fn lumpsum_calculator() -> Html {
    let amount = use_state(|| "100000".to_string());
    let rate = use_state(|| "12".to_string());
    let years = use_state(|| "10".to_string());
    let outcome = use_state(|| None::<GrowthBreakdown>);
    let chart_slot = use_mut_ref(|| None::<chart::DoughnutChart>);
    let canvas_ref = use_node_ref();

    {
        let outcome = outcome.clone();
        let chart_slot = chart_slot.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(amount, rate, years): &(String, String, String)| {
                let next = parse_field(amount)
                    .zip(parse_field(rate))
                    .zip(parse_field(years))
                    .and_then(|((a, r), y)| finance::lumpsum_future_value(a, r, y));
                if let Some(next) = next {
                    chart::upsert_doughnut(
                        &chart_slot,
                        &canvas_ref,
                        ["Invested Amount", "Estimated Returns"],
                        [chart::MUTED_SLICE, chart::ACCENT_SLICE],
                        [next.invested, next.returns],
                    );
                    outcome.set(Some(next));
                }
                || ()
            },
            ((*amount).clone(), (*rate).clone(), (*years).clone()),
        );
    }

    html! {
        <div class="calc-card">
            <h3>{"Lumpsum Calculator"}</h3>
            <SyncedField label="Total Investment (₹)" min={5000.0} max={10000000.0} step={5000.0}
                value={(*amount).clone()} on_change={state_setter(&amount)} />
            <SyncedField label="Expected Return Rate (% p.a.)" min={1.0} max={30.0} step={0.5}
                value={(*rate).clone()} on_change={state_setter(&rate)} />
            <SyncedField label="Time Period (Years)" min={1.0} max={40.0} step={1.0}
                value={(*years).clone()} on_change={state_setter(&years)} />
            { match *outcome {
                Some(o) => html! {
                    <div class="calc-results">
                        { result_row("Invested Amount", format_inr(o.invested)) }
                        { result_row("Estimated Returns", format_inr(o.returns)) }
                        { result_row("Total Value", format_inr(o.total)) }
                    </div>
                },
                None => html! {},
            } }
            <div class="chart-wrap"><canvas ref={canvas_ref}></canvas></div>
        </div>
    }
}

#[function_component(LoanCalculator)]
fn loan_calculator() -> Html {
    let amount = use_state(|| "1000000".to_string());
    let rate = use_state(|| "8.5".to_string());
    let tenure = use_state(|| "20".to_string());
    let outcome = use_state(|| None::<LoanBreakdown>);
    let chart_slot = use_mut_ref(|| None::<chart::DoughnutChart>);
    let canvas_ref = use_node_ref();

    {
        let outcome = outcome.clone();
        let chart_slot = chart_slot.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(amount, rate, tenure): &(String, String, String)| {
                let parsed = parse_field(amount)
                    .zip(parse_field(rate))
                    .zip(parse_field(tenure));
                if let Some(((principal, r), y)) = parsed {
                    if let Some(next) = finance::loan_emi(principal, r, y) {
                        // Accent sits on the principal slice for loans.
                        chart::upsert_doughnut(
                            &chart_slot,
                            &canvas_ref,
                            ["Principal Amount", "Total Interest"],
                            [chart::ACCENT_SLICE, chart::MUTED_SLICE],
                            [principal, next.total_interest],
                        );
                        outcome.set(Some(next));
                    }
                }
                || ()
            },
            ((*amount).clone(), (*rate).clone(), (*tenure).clone()),
        );
    }

    html! {
        <div class="calc-card">
            <h3>{"Loan EMI Calculator"}</h3>
            <SyncedField label="Loan Amount (₹)" min={50000.0} max={20000000.0} step={50000.0}
                value={(*amount).clone()} on_change={state_setter(&amount)} />
            <SyncedField label="Interest Rate (% p.a.)" min={1.0} max={20.0} step={0.1}
                value={(*rate).clone()} on_change={state_setter(&rate)} />
            <SyncedField label="Loan Tenure (Years)" min={1.0} max={30.0} step={1.0}
                value={(*tenure).clone()} on_change={state_setter(&tenure)} />
            { match *outcome {
                Some(o) => html! {
                    <div class="calc-results">
                        { result_row("Monthly EMI", format_inr(o.emi)) }
                        { result_row("Total Interest", format_inr(o.total_interest)) }
                        { result_row("Total Payment", format_inr(o.total_payment)) }
                    </div>
                },
                None => html! {},
            } }
            <div class="chart-wrap"><canvas ref={canvas_ref}></canvas></div>
        </div>
    }
}

#[function_component(TradeCalculator)]
fn trade_calculator() -> Html {
    let buy = use_state(|| "100".to_string());
    let sell = use_state(|| "150".to_string());
    let quantity = use_state(|| "10".to_string());
    // Last good (cost basis, outcome) pair; parse failures leave it be.
    let outcome = use_state(|| None::<(f64, TradeOutcome)>);
    let chart_slot = use_mut_ref(|| None::<chart::DoughnutChart>);
    let canvas_ref = use_node_ref();

    {
        let outcome = outcome.clone();
        let chart_slot = chart_slot.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(buy, sell, quantity): &(String, String, String)| {
                let parsed = parse_field(buy)
                    .zip(parse_field(sell))
                    .zip(parse_field(quantity));
                if let Some(((b, s), q)) = parsed {
                    if let Some(next) = finance::profit_loss(b, s, q) {
                        let cost = b * q;
                        chart::upsert_doughnut(
                            &chart_slot,
                            &canvas_ref,
                            ["Invested Amount", "Profit / Loss"],
                            [chart::MUTED_SLICE, chart::ACCENT_SLICE],
                            [cost, next.amount],
                        );
                        outcome.set(Some((cost, next)));
                    }
                }
                || ()
            },
            ((*buy).clone(), (*sell).clone(), (*quantity).clone()),
        );
    }

    html! {
        <div class="calc-card">
            <h3>{"Profit / Loss Calculator"}</h3>
            <NumberField label="Buy Price (₹)" value={(*buy).clone()} on_change={state_setter(&buy)} />
            <NumberField label="Sell Price (₹)" value={(*sell).clone()} on_change={state_setter(&sell)} />
            <NumberField label="Quantity" value={(*quantity).clone()} on_change={state_setter(&quantity)} />
            { match *outcome {
                Some((cost, o)) => {
                    let accent = if o.is_gain() { "profit" } else { "loss" };
                    html! {
                        <div class="calc-results">
                            { result_row("Invested Amount", format_inr(cost)) }
                            <div class="result-row">
                                <span>{"Profit / Loss"}</span>
                                <span id="pl-result" class={accent}>{ format_inr(o.amount) }</span>
                            </div>
                            <div class="result-row">
                                <span>{"Return"}</span>
                                <span id="pl-percent" class={accent}>{ format_percent(o.percent) }</span>
                            </div>
                        </div>
                    }
                }
                None => html! {},
            } }
            <div class="chart-wrap"><canvas ref={canvas_ref}></canvas></div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
struct GoalPlan {
    monthly: f64,
    invested: f64,
    target: f64,
}

#[function_component(PlannerPage)]
fn planner_page() -> Html {
    let target = use_state(|| "1000000".to_string());
    let years = use_state(|| "10".to_string());
    let rate = use_state(|| "12".to_string());
    let plan = use_state(|| None::<GoalPlan>);
    let chart_slot = use_mut_ref(|| None::<chart::DoughnutChart>);
    let canvas_ref = use_node_ref();

    {
        let plan = plan.clone();
        let chart_slot = chart_slot.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(target, years, rate): &(String, String, String)| {
                let parsed = parse_field(target)
                    .zip(parse_field(years))
                    .zip(parse_field(rate));
                if let Some(((t, y), r)) = parsed {
                    if let Some(monthly) = finance::required_sip(t, r, y) {
                        let invested = monthly * y * 12.0;
                        chart::upsert_doughnut(
                            &chart_slot,
                            &canvas_ref,
                            ["Your Contributions", "Market Growth"],
                            [chart::MUTED_SLICE, chart::ACCENT_SLICE],
                            [invested, t - invested],
                        );
                        plan.set(Some(GoalPlan {
                            monthly,
                            invested,
                            target: t,
                        }));
                    }
                }
                || ()
            },
            ((*target).clone(), (*years).clone(), (*rate).clone()),
        );
    }

    html! {
        <div class="planner-grid">
            <div class="calc-card">
                <h3>{"Goal Planner"}</h3>
                <p class="card-hint">{"How much should you invest every month to hit a target?"}</p>
                <NumberField label="Target Amount (₹)" value={(*target).clone()} on_change={state_setter(&target)} />
                <NumberField label="Time to Goal (Years)" value={(*years).clone()} on_change={state_setter(&years)} />
                <SyncedField label="Expected Return Rate (% p.a.)" min={1.0} max={30.0} step={0.5}
                    value={(*rate).clone()} on_change={state_setter(&rate)} />
                { match *plan {
                    Some(p) => html! {
                        <div class="calc-results">
                            <div class="result-row headline">
                                <span>{"Required Monthly SIP"}</span>
                                <span id="goal-sip">{ format_inr(p.monthly) }</span>
                            </div>
                            { result_row("Total Contributions", format_inr(p.invested)) }
                            { result_row("Goal Amount", format_inr(p.target)) }
                        </div>
                    },
                    None => html! {},
                } }
                <div class="chart-wrap"><canvas ref={canvas_ref}></canvas></div>
            </div>
        </div>
    }
}

#[function_component(LearnPage)]
fn learn_page() -> Html {
    html! {
        <div class="learn-grid">
            <div class="lesson-card">
                <h3>{"Start with the basics"}</h3>
                <p>{"A SIP invests a fixed amount every month, so you buy more units when \
                     prices are low. A lumpsum puts the whole amount to work on day one. \
                     Both compound over time; the right mix depends on your risk appetite."}</p>
            </div>
            <QuizCard />
        </div>
    }
}

#[function_component(QuizCard)]
fn quiz_card() -> Html {
    let selected = use_state(|| None::<RiskProfile>);
    let result = use_state(|| None::<&'static str>);

    let on_submit = {
        let selected = selected.clone();
        let result = result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            result.set(Some(match *selected {
                Some(profile) => profile.verdict(),
                None => quiz::SELECT_PROMPT,
            }));
        })
    };

    html! {
        <form id="investor-quiz" class="quiz-card" onsubmit={on_submit}>
            <h3>{"What kind of investor are you?"}</h3>
            <p class="card-hint">{"The market drops 20% in a month. What do you do?"}</p>
            { for RiskProfile::ALL.into_iter().map(|profile| {
                let selected = selected.clone();
                html! {
                    <label class="quiz-option">
                        <input
                            type="radio"
                            name="investor-type"
                            value={profile.value()}
                            checked={*selected == Some(profile)}
                            onchange={Callback::from(move |e: Event| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                selected.set(RiskProfile::from_value(&input.value()));
                            })}
                        />
                        { profile.label() }
                    </label>
                }
            }) }
            <button type="submit">{"Reveal My Profile"}</button>
            { match *result {
                Some(text) => html! { <p id="quiz-result" class="quiz-result">{ text }</p> },
                None => html! {},
            } }
        </form>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(theme::load);
    let active_page = use_state(|| Page::Home);

    use_effect_with_deps(
        |current: &Theme| {
            theme::apply(*current);
            || ()
        },
        *theme,
    );

    use_effect_with_deps(
        |_| {
            chart::apply_global_defaults();
            || ()
        },
        (),
    );

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = (*theme).toggled();
            theme::store(next);
            theme.set(next);
        })
    };

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match *active_page {
        Page::Home => html! { <HomePage theme={*theme} /> },
        Page::Calculators => html! { <CalculatorsPage /> },
        Page::Planner => html! { <PlannerPage /> },
        Page::Learn => html! { <LearnPage /> },
    };

    html! {
        <>
            <Header
                active_page={*active_page}
                on_select={on_select}
                theme={*theme}
                on_toggle_theme={on_toggle_theme}
            />
            <main>{ content }</main>
        </>
    }
}

fn parse_field(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

fn state_setter(handle: &UseStateHandle<String>) -> Callback<String> {
    let handle = handle.clone();
    Callback::from(move |value: String| handle.set(value))
}

fn result_row(label: &'static str, value: String) -> Html {
    html! {
        <div class="result-row">
            <span>{ label }</span>
            <span class="result-value">{ value }</span>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
