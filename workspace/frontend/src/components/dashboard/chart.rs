use common::{ForecastSeries, PriceSeries};
use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::{Axis, AxisType, Legend};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub history: PriceSeries,
    pub forecast: ForecastSeries,
}

/// Two-series price chart: the actual historical prices and the forecast
/// curve over the full computed range. The forecast trace overlaps the
/// historical span because the grid always starts at the series' earliest
/// date.
#[function_component(PriceChart)]
pub fn price_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let history = props.history.clone();
    let forecast = props.forecast.clone();

    use_effect_with(
        (container_ref.clone(), history, forecast),
        move |(container_ref, history, forecast)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("price-chart");

                let actual_dates: Vec<String> =
                    history.points.iter().map(|p| p.date.to_string()).collect();
                let actual_prices: Vec<f64> = history.points.iter().map(|p| p.price).collect();

                let forecast_dates: Vec<String> =
                    forecast.points.iter().map(|p| p.date.to_string()).collect();
                let forecast_values: Vec<f64> = forecast.points.iter().map(|p| p.value).collect();

                // Hover shows the calendar date and the two-decimal price
                // for the nearest marker.
                let hover = "Date: %{x|%F}<br>Price: %{y:.2f}<extra></extra>";

                let actual_trace = Scatter::new(actual_dates, actual_prices)
                    .mode(Mode::LinesMarkers)
                    .name("Actual Price")
                    .line(Line::new().color("green").width(2.0))
                    .marker(Marker::new().size(4))
                    .hover_template(hover);

                let forecast_trace = Scatter::new(forecast_dates, forecast_values)
                    .mode(Mode::LinesMarkers)
                    .name("Forecasted Price")
                    .line(Line::new().color("orange").width(2.0))
                    .marker(Marker::new().size(4))
                    .hover_template(hover);

                let layout = Layout::new()
                    .title(Title::with_text("Oil Price Prediction"))
                    .x_axis(Axis::new().type_(AxisType::Date).title(Title::with_text("Date")))
                    .y_axis(Axis::new().title(Title::with_text("Price (USD/BBL)")))
                    .legend(Legend::new().x(0.0).y(1.0).title(Title::with_text("Legend")))
                    .height(400);

                // Serialize traces to JSON and parse as JS objects
                let data_js = js_sys::Array::new();
                for trace_json in [
                    serde_json::to_string(&actual_trace).unwrap(),
                    serde_json::to_string(&forecast_trace).unwrap(),
                ] {
                    let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                    data_js.push(&trace_js);
                }

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot("price-chart", data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
