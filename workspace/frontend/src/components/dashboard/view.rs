use chrono::NaiveDate;
use common::{ForecastSeries, PriceSeries};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::chart::PriceChart;
use crate::api_client::forecast::get_forecast;
use crate::api_client::history::get_history;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

/// The dashboard page: date input, Predict button, the forecasted value
/// for the chosen date, and the actual-vs-forecast chart.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (history_state, _refetch) = use_fetch_with_refetch(get_history);
    let forecast_state = use_state(FetchState::<ForecastSeries>::default);
    let date_input = use_node_ref();
    let toast_ctx = use_context::<ToastContext>().expect("ToastProvider missing");

    let on_predict = {
        let forecast_state = forecast_state.clone();
        let date_input = date_input.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_: MouseEvent| {
            let value = date_input
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            if value.is_empty() {
                toast_ctx.show_info("Select a date before predicting".to_string());
                return;
            }

            let target = match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                Ok(date) => date,
                Err(e) => {
                    toast_ctx.show_error(format!("Invalid date '{}': {}", value, e));
                    return;
                }
            };

            log::debug!("Predict requested for target date {}", target);
            forecast_state.set(FetchState::Loading);

            let forecast_state = forecast_state.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match get_forecast(target).await {
                    Ok(series) => forecast_state.set(FetchState::Success(series)),
                    Err(err) => {
                        forecast_state.set(FetchState::Error(err.clone()));
                        toast_ctx.show_error(err);
                    }
                }
            });
        })
    };

    html! {
        <div class="container mx-auto p-6 max-w-4xl">
            <h1 class="text-2xl font-bold mb-1">{"Oil Price Prediction"}</h1>
            <p class="text-sm text-gray-500 mb-6">
                {"WTI crude oil spot price, actual vs. forecasted (USD/BBL)"}
            </p>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Enter a date:"}</span>
                        </label>
                        <div class="flex gap-2">
                            <input
                                ref={date_input}
                                type="date"
                                name="target_date"
                                class="input input-bordered"
                            />
                            <button class="btn btn-primary" onclick={on_predict}>
                                {"Predict"}
                            </button>
                        </div>
                    </div>

                    {forecast_result(&*forecast_state)}
                </div>
            </div>

            {chart_card(&*history_state, &*forecast_state)}
        </div>
    }
}

/// The text output for the single-date forecast value.
fn forecast_result(forecast_state: &FetchState<ForecastSeries>) -> Html {
    match forecast_state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! {
            <div class="flex items-center gap-2 mt-4">
                <span class="loading loading-spinner loading-sm"></span>
                <span>{"Computing forecast..."}</span>
            </div>
        },
        FetchState::Error(error) => html! {
            <div class="alert alert-error mt-4">
                <span>{error}</span>
            </div>
        },
        FetchState::Success(series) => match series.target_value {
            Some(value) => html! {
                <p class="mt-4 text-lg">
                    {format!("Forecasted Oil Price (USD/BBL): {:.2}", value)}
                </p>
            },
            None => html! {
                <p class="mt-4 text-lg">
                    {"No forecast available for the specified date."}
                </p>
            },
        },
    }
}

/// The chart renders once a predict action has produced a forecast; the
/// historical trace never depends on the chosen target date.
fn chart_card(
    history_state: &FetchState<PriceSeries>,
    forecast_state: &FetchState<ForecastSeries>,
) -> Html {
    let FetchState::Success(forecast) = forecast_state else {
        return html! {};
    };

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Oil Price Prediction"}</h3>

                {match history_state {
                    FetchState::Loading => html! {
                        <div class="flex justify-center items-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    },
                    FetchState::Error(error) => html! {
                        <div class="alert alert-error">
                            <span>{error}</span>
                        </div>
                    },
                    FetchState::Success(history) => html! {
                        <PriceChart history={history.clone()} forecast={forecast.clone()} />
                    },
                    FetchState::NotStarted => html! { <></> },
                }}
            </div>
        </div>
    }
}
