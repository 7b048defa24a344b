use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

/// Request context stand-in that records what handlers did to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Probe {
	calls: usize,
	payload: Vec<u32>,
}

type TestHandler = fn(&mut Probe) -> Result<&'static str, String>;

fn ok_handler(probe: &mut Probe) -> Result<&'static str, String> {
	probe.calls += 1;
	Ok("ok")
}

fn failing_handler(probe: &mut Probe) -> Result<&'static str, String> {
	probe.calls += 1;
	Err(format!("payload of {} words rejected", probe.payload.len()))
}

fn scenario() -> CommandRegistry<TestHandler> {
	RegistryBuilder::<TestHandler>::new("test")
		.push(FunctionInfo::unimplemented(0, "A"))
		.push(FunctionInfo::new(1, "B", ok_handler as TestHandler))
		.build()
		.expect("scenario table has no duplicates")
}

fn call(
	registry: &CommandRegistry<TestHandler>,
	id: u32,
	probe: &mut Probe,
) -> Result<&'static str, DispatchError<String>> {
	registry.dispatch(id, probe, |handler, probe| handler(probe))
}

#[test]
fn scenario_outcomes() {
	let registry = scenario();
	let mut probe = Probe::default();

	assert_eq!(
		call(&registry, 0, &mut probe),
		Err(DispatchError::UnimplementedCommand { id: 0, name: "A" })
	);
	assert_eq!(call(&registry, 1, &mut probe), Ok("ok"));
	assert_eq!(
		call(&registry, 99, &mut probe),
		Err(DispatchError::UnknownCommand { id: 99 })
	);
	assert_eq!(probe.calls, 1);
}

#[test]
fn handler_runs_once_with_context_untouched() {
	let registry = scenario();
	let mut probe = Probe {
		calls: 0,
		payload: vec![0xdead, 0xbeef],
	};
	let original: *const Probe = &probe;

	let mut seen = None;
	let out = registry.dispatch(1, &mut probe, |handler, ctx| {
		seen = Some(std::ptr::eq(&*ctx, original));
		handler(ctx)
	});

	assert_eq!(out, Ok("ok"));
	assert_eq!(seen, Some(true));
	assert_eq!(probe.calls, 1);
	assert_eq!(probe.payload, vec![0xdead, 0xbeef]);
}

#[test]
fn handler_failure_passes_through() {
	let registry = RegistryBuilder::<TestHandler>::new("test")
		.push(FunctionInfo::new(5, "Fails", failing_handler as TestHandler))
		.build()
		.unwrap();
	let mut probe = Probe {
		calls: 0,
		payload: vec![1, 2, 3],
	};

	let err = call(&registry, 5, &mut probe).unwrap_err();
	assert_eq!(
		err,
		DispatchError::Handler("payload of 3 words rejected".to_string())
	);
	assert!(!err.is_not_supported());
	assert_eq!(err.command_id(), None);
	assert_eq!(probe.calls, 1);
}

#[test]
fn unimplemented_rows_never_invoke() {
	let registry = scenario();
	let mut invoked = false;
	let err = registry
		.dispatch(0, (), |_, ()| {
			invoked = true;
			Ok::<_, String>("unreachable")
		})
		.unwrap_err();

	assert!(!invoked);
	assert!(err.is_not_supported());
	assert_eq!(err.command_id(), Some(0));
}

#[test]
fn resolve_reports_state_without_invoking() {
	let registry = scenario();

	assert!(matches!(registry.resolve(0), Resolution::Unimplemented(info) if info.name == "A"));
	assert!(matches!(registry.resolve(1), Resolution::Ready { info, .. } if info.name == "B"));
	assert!(matches!(registry.resolve(2), Resolution::Unknown));
}

#[test]
fn entries_keep_table_order() {
	let registry = RegistryBuilder::<TestHandler>::new("test")
		.extend([
			FunctionInfo::unimplemented(20, "C"),
			FunctionInfo::unimplemented(3, "A"),
			FunctionInfo::unimplemented(11, "B"),
		])
		.build()
		.unwrap();

	let ids: Vec<u32> = registry.entries().iter().map(|e| e.id).collect();
	assert_eq!(ids, vec![20, 3, 11]);
	assert_eq!(registry.len(), 3);
	assert_eq!(registry.label(), "test");
	assert!(registry.collisions().is_empty());
}

fn conflicting(policy: DuplicatePolicy) -> Result<CommandRegistry<TestHandler>, BuildError> {
	RegistryBuilder::<TestHandler>::new("conflict")
		.duplicate_policy(policy)
		.push(FunctionInfo::unimplemented(2000, "DeactivateDigitizer"))
		.push(FunctionInfo::unimplemented(2002, "UnsetDigitizerAutoPilotState"))
		.push(FunctionInfo::new(2002, "ReloadFirmwareDebugSettings", ok_handler as TestHandler))
		.build()
}

#[test]
fn duplicate_ids_rejected_by_default() {
	let err = RegistryBuilder::<TestHandler>::new("conflict")
		.push(FunctionInfo::unimplemented(7, "First"))
		.push(FunctionInfo::unimplemented(7, "Second"))
		.build()
		.unwrap_err();

	assert_eq!(
		err,
		BuildError::DuplicateCommand {
			registry: "conflict",
			id: 7,
			existing: "First",
			new: "Second",
		}
	);
	assert_eq!(
		err.to_string(),
		"duplicate command id in conflict: id=7 existing=\"First\" new=\"Second\""
	);
}

#[test]
fn ambiguous_policy_keeps_both_rows_and_refuses_dispatch() {
	let registry = conflicting(DuplicatePolicy::Ambiguous).unwrap();
	let mut probe = Probe::default();

	assert_eq!(registry.len(), 3);
	assert!(registry.is_ambiguous(2002));
	assert!(registry.get(2002).is_none());
	assert_eq!(
		call(&registry, 2002, &mut probe),
		Err(DispatchError::Ambiguous {
			id: 2002,
			names: vec!["UnsetDigitizerAutoPilotState", "ReloadFirmwareDebugSettings"],
		})
	);
	assert_eq!(probe.calls, 0);
	assert_eq!(
		registry.collisions(),
		&[Collision {
			registry: "conflict",
			id: 2002,
			existing: "UnsetDigitizerAutoPilotState",
			new: "ReloadFirmwareDebugSettings",
			action: InsertAction::MarkedAmbiguous,
		}]
	);
}

#[rstest]
#[case(DuplicatePolicy::FirstWins, "UnsetDigitizerAutoPilotState", InsertAction::KeptExisting)]
#[case(DuplicatePolicy::LastWins, "ReloadFirmwareDebugSettings", InsertAction::ReplacedExisting)]
fn explicit_resolution_is_recorded(
	#[case] policy: DuplicatePolicy,
	#[case] winner: &str,
	#[case] action: InsertAction,
) {
	let registry = conflicting(policy).unwrap();

	assert_eq!(registry.len(), 2);
	assert!(!registry.is_ambiguous(2002));
	assert_eq!(registry.get(2002).map(|info| info.name), Some(winner));
	assert_eq!(registry.collisions().len(), 1);
	assert_eq!(registry.collisions()[0].action, action);
}

#[test]
fn identical_rows_collapse_without_collision() {
	let registry = RegistryBuilder::<TestHandler>::new("test")
		.push(FunctionInfo::unimplemented(4, "Same"))
		.push(FunctionInfo::unimplemented(4, "Same"))
		.build()
		.unwrap();

	assert_eq!(registry.len(), 1);
	assert!(registry.collisions().is_empty());
}

#[rstest]
#[case(FunctionInfo::unimplemented(7, "X"), FunctionInfo::new(7, "X", ok_handler as TestHandler))]
#[case(FunctionInfo::new(7, "X", ok_handler as TestHandler), FunctionInfo::unimplemented(7, "X"))]
#[case(
	FunctionInfo::new(7, "X", ok_handler as TestHandler),
	FunctionInfo::new(7, "X", failing_handler as TestHandler)
)]
fn same_name_with_handler_is_rejected(
	#[case] first: FunctionInfo<TestHandler>,
	#[case] second: FunctionInfo<TestHandler>,
) {
	let err = RegistryBuilder::new("test")
		.push(first)
		.push(second)
		.build()
		.unwrap_err();

	assert_eq!(
		err,
		BuildError::DuplicateCommand {
			registry: "test",
			id: 7,
			existing: "X",
			new: "X",
		}
	);
}

#[test]
fn same_name_with_handler_is_never_dropped_under_ambiguous() {
	let registry = RegistryBuilder::<TestHandler>::new("test")
		.duplicate_policy(DuplicatePolicy::Ambiguous)
		.push(FunctionInfo::unimplemented(7, "X"))
		.push(FunctionInfo::new(7, "X", ok_handler as TestHandler))
		.build()
		.unwrap();

	assert_eq!(registry.len(), 2);
	assert!(registry.is_ambiguous(7));
	assert_eq!(registry.collisions().len(), 1);
	assert_eq!(
		call(&registry, 7, &mut Probe::default()),
		Err(DispatchError::Ambiguous {
			id: 7,
			names: vec!["X", "X"],
		})
	);
}

#[test]
fn concurrent_dispatch_shares_one_registry() {
	let registry = scenario();

	let outcomes: Vec<_> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..8u32)
			.map(|n| {
				let registry = &registry;
				scope.spawn(move || {
					let mut probe = Probe::default();
					let id = n % 3;
					let out = call(registry, id, &mut probe);
					(id, out, probe.calls)
				})
			})
			.collect();
		handles
			.into_iter()
			.map(|h| h.join().expect("thread panicked"))
			.collect()
	});

	assert_eq!(outcomes.len(), 8);
	for (id, out, calls) in outcomes {
		match id {
			0 => assert_eq!(out, Err(DispatchError::UnimplementedCommand { id: 0, name: "A" })),
			1 => {
				assert_eq!(out, Ok("ok"));
				assert_eq!(calls, 1);
			}
			_ => assert_eq!(out, Err(DispatchError::UnknownCommand { id })),
		}
		if id != 1 {
			assert_eq!(calls, 0);
		}
	}
}

#[test]
fn third_claimant_joins_ambiguous_slot() {
	let registry = RegistryBuilder::<TestHandler>::new("test")
		.duplicate_policy(DuplicatePolicy::Ambiguous)
		.extend([
			FunctionInfo::unimplemented(9, "X"),
			FunctionInfo::unimplemented(9, "Y"),
			FunctionInfo::unimplemented(9, "Z"),
		])
		.build()
		.unwrap();

	match registry.resolve(9) {
		Resolution::Ambiguous(infos) => {
			let names: Vec<_> = infos.iter().map(|info| info.name).collect();
			assert_eq!(names, vec!["X", "Y", "Z"]);
		}
		other => panic!("expected ambiguous resolution, got {other:?}"),
	}
	assert_eq!(registry.collisions().len(), 2);
}

proptest! {
	#[test]
	fn unregistered_ids_are_unknown(id in 2u32..) {
		let registry = scenario();
		let mut probe = Probe::default();
		prop_assert_eq!(
			call(&registry, id, &mut probe),
			Err(DispatchError::UnknownCommand { id })
		);
		prop_assert_eq!(probe.calls, 0);
	}

	#[test]
	fn unimplemented_rows_report_their_name(ids in prop::collection::btree_set(0u32..10_000, 1..64)) {
		let rows: Vec<FunctionInfo<TestHandler>> = ids
			.iter()
			.map(|&id| FunctionInfo::unimplemented(id, "Stub"))
			.collect();
		let registry = RegistryBuilder::new("prop").extend(rows).build().unwrap();
		for id in ids {
			prop_assert_eq!(
				call(&registry, id, &mut Probe::default()),
				Err(DispatchError::UnimplementedCommand { id, name: "Stub" })
			);
		}
	}
}
