use crate::infra::{parse_stress_tolerance, planning_service, InMemoryTripSink};
use clap::Args;
use route_policy::config::AppConfig;
use route_policy::error::AppError;
use route_policy::planning::PlanResponse;
use route_policy::policy::domain::{
    DepartureType, DepartureWindow, LatLng, ModeSelection, PolicyConstraints, RoutePreferences,
    Trailer, TrailerType, UserState, VehicleProfile, VehicleType, WeightClass,
};
use route_policy::policy::{Mode, PolicyConfig, TripRequest};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    /// Path to a plan request JSON document
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Print the raw response envelope instead of the ranked report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Trailer length in feet for the canned towing trip
    #[arg(long, default_value_t = 18.0)]
    pub(crate) trailer_length_ft: f64,
    /// Driver stress tolerance (1-100)
    #[arg(long, default_value = "40", value_parser = parse_stress_tolerance)]
    pub(crate) stress_tolerance: u8,
    /// Print the raw response envelope instead of the ranked report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.request)?;
    let request: TripRequest = serde_json::from_str(&raw)?;

    let response = plan_with(AppConfig::load()?.policy, request)?;
    print_response(&response, args.json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let request = demo_trip_request(args.trailer_length_ft, args.stress_tolerance);

    println!(
        "Route policy demo: {:.0} ft camper, stress tolerance {}",
        args.trailer_length_ft, args.stress_tolerance
    );
    let response = plan_with(AppConfig::load()?.policy, request)?;
    print_response(&response, args.json)
}

fn plan_with(policy: PolicyConfig, request: TripRequest) -> Result<PlanResponse, AppError> {
    let service = planning_service(policy, Arc::new(InMemoryTripSink::default()));
    Ok(service.plan(request)?)
}

fn print_response(response: &PlanResponse, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        render_plan_report(response);
    }
    Ok(())
}

fn demo_trip_request(trailer_length_ft: f64, stress_tolerance: u8) -> TripRequest {
    TripRequest {
        request_id: "demo-tow-trip".to_string(),
        origin: LatLng {
            lat: 44.9778,
            lng: -93.265,
        },
        destination: LatLng {
            lat: 46.7867,
            lng: -92.1005,
        },
        time: DepartureWindow {
            departure_type: DepartureType::Now,
            departure_time_iso: None,
        },
        mode: ModeSelection {
            primary: Mode::LowStress,
            also_return: Some(Mode::ALL[1..].to_vec()),
        },
        user_state: UserState { stress_tolerance },
        vehicle_profile: VehicleProfile {
            vehicle_type: VehicleType::Truck,
            trailer: Some(Trailer {
                enabled: true,
                kind: Some(TrailerType::Camper),
                length_ft: Some(trailer_length_ft),
                width_ft: Some(8.0),
                height_ft: Some(10.5),
                weight_class: WeightClass::Heavy,
            }),
        },
        preferences: Some(RoutePreferences {
            avoid_tight_streets: Some(true),
            ..RoutePreferences::default()
        }),
        constraints: Some(PolicyConstraints::default()),
        session: None,
    }
}

fn render_plan_report(response: &PlanResponse) {
    println!(
        "Plan {} generated at {}",
        response.request_id, response.generated_at_iso
    );

    for result in &response.results {
        let summary = &result.policy_summary;
        println!("\n{} ({} routes)", result.mode.label(), result.routes.len());
        println!(
            "  large trailer rules: {} | exception radius {} mi | avoid tight streets: {} | tolerance {}",
            if summary.large_trailer_applied { "on" } else { "off" },
            summary.destination_exception_radius_miles,
            if summary.avoid_tight_streets_effective { "yes" } else { "no" },
            summary.stress_tolerance_used
        );

        for route in &result.routes {
            let candidate = &route.candidate;
            let tow = candidate
                .scores
                .tow_confidence
                .map(|confidence| format!(" | tow confidence {confidence}/10"))
                .unwrap_or_default();
            println!(
                "  #{} {} [{}] p50 {}s / p90 {}s | stress {}{}",
                route.rank,
                candidate.route_id,
                route.selection_id,
                candidate.eta.seconds_p50,
                candidate.eta.seconds_p90,
                candidate.scores.stress_score,
                tow
            );
            for reason in &candidate.why {
                println!("     - {reason}");
            }
            for advisory in &candidate.advisories {
                println!("     ! {}", advisory.message);
            }
        }
    }
}
