mod chart;
mod harness;
mod selftest;
mod trace;

pub use chart::{ChartError, render_chart};
pub use harness::{BenchmarkPoint, BenchmarkSeries, HarnessError, benchmark, benchmark_case};
pub use selftest::{CorrectnessFailure, SelfTestError, run_self_test, test_battery};
pub use trace::render_trace_event;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use qsort::generate::CaseLabel;
    use qsort::{PivotPolicy, RecursionFrame, SortError, TraceEvent};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn sort_ok(mut data: Vec<u64>) -> Result<Vec<u64>, SortError> {
        data.sort_unstable();
        Ok(data)
    }

    #[test]
    fn benchmark_one_point_per_size() {
        let sizes = [10_usize, 20, 50];
        let points = benchmark(sort_ok, |n| vec![1; n], &sizes, 3).unwrap();
        assert_eq!(points.len(), sizes.len());
        for (point, &size) in points.iter().zip(&sizes) {
            assert_eq!(point.size, size);
        }
    }

    #[test]
    fn benchmark_regenerates_per_trial() {
        let mut calls = 0_usize;
        benchmark(
            sort_ok,
            |n| {
                calls += 1;
                vec![0; n]
            },
            &[4, 8],
            5,
        )
        .unwrap();
        assert_eq!(calls, 2 * 5);
    }

    #[test]
    fn benchmark_rejects_zero_trials() {
        let err = benchmark(sort_ok, |n| vec![0; n], &[10], 0).unwrap_err();
        assert_eq!(err, HarnessError::ZeroTrials);
    }

    #[test]
    fn benchmark_rejects_non_increasing_sizes() {
        let err = benchmark(sort_ok, |n| vec![0; n], &[10, 10, 20], 1).unwrap_err();
        assert_eq!(err, HarnessError::SizesNotIncreasing { prev: 10, next: 10 });

        let err = benchmark(sort_ok, |n| vec![0; n], &[50, 20], 1).unwrap_err();
        assert_eq!(err, HarnessError::SizesNotIncreasing { prev: 50, next: 20 });
    }

    #[test]
    fn benchmark_propagates_sort_errors() {
        let err = benchmark(
            |_| Err(SortError::Comparison),
            |n| vec![0; n],
            &[10],
            1,
        )
        .unwrap_err();
        assert_eq!(err, HarnessError::Sort(SortError::Comparison));
    }

    #[test]
    fn benchmark_case_covers_all_sizes() {
        let sizes = [10_usize, 30, 60];
        for &case in &qsort::generate::ALL_CASES {
            let series =
                benchmark_case(case, PivotPolicy::FirstElement, &sizes, 2, 0xB3_2026).unwrap();
            assert_eq!(series.case, case);
            assert_eq!(series.points.len(), sizes.len());
        }
    }

    #[test]
    fn self_test_battery_passes() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut out = Vec::new();
        run_self_test(&mut out, &mut rng).unwrap();

        let listing = String::from_utf8(out).unwrap();
        assert!(listing.contains("input:"));
        assert!(listing.contains("expected:"));
        assert!(listing.contains("first_element:"));
        assert!(listing.contains("random_element:"));
    }

    #[test]
    fn battery_has_expected_shapes() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2027);
        let battery = test_battery(&mut rng);
        assert_eq!(battery.len(), 7);
        assert_eq!(battery[0], Vec::<i64>::new());
        assert_eq!(battery[1], vec![1]);
        assert_eq!(battery[2], vec![2, 1]);
        assert_eq!(battery[5], vec![3, 1, 2, 1, 5, 3]);
        assert_eq!(battery[6].len(), 10);
    }

    #[test]
    fn trace_rendering_is_depth_indented() {
        let frame = TraceEvent::Frame(RecursionFrame {
            depth: 2,
            pivot: 3_i64,
            less: vec![1, 2],
            greater_or_equal: vec![6, 8, 5],
        });
        assert_eq!(
            render_trace_event(&frame),
            "    pivot 3 -> less: [1, 2], greater_or_equal: [6, 8, 5]"
        );

        let leaf = TraceEvent::Leaf {
            depth: 1,
            values: vec![7_i64],
        };
        assert_eq!(render_trace_event(&leaf), "  base case reached: [7]");
    }

    #[test]
    fn chart_writes_svg() {
        let series = vec![BenchmarkSeries {
            case: CaseLabel::Worst,
            policy: PivotPolicy::FirstElement,
            points: vec![
                BenchmarkPoint {
                    size: 100,
                    mean: Duration::from_micros(40),
                },
                BenchmarkPoint {
                    size: 200,
                    mean: Duration::from_micros(160),
                },
            ],
        }];

        let path = std::env::temp_dir().join("quickbench-chart-test.svg");
        render_chart(&path, &series).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        assert!(contents.contains("worst_case"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn chart_rejects_empty_input() {
        let path = std::env::temp_dir().join("quickbench-chart-empty.svg");
        let err = render_chart(&path, &[]).unwrap_err();
        assert!(matches!(err, ChartError::Empty));
    }
}
