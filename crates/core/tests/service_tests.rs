// ═══════════════════════════════════════════════════════════════════
// Service Tests — StatsService, FilterService, CalendarService,
// ValidationService
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use dealvault_core::errors::CoreError;
use dealvault_core::models::category::{Category, CategoryInput};
use dealvault_core::models::deal::{Deal, DealInput, DealStatus};
use dealvault_core::models::filter::DealFilter;
use dealvault_core::models::platform::{Platform, PlatformInput};
use dealvault_core::services::calendar_service::CalendarService;
use dealvault_core::services::filter_service::FilterService;
use dealvault_core::services::stats_service::StatsService;
use dealvault_core::services::validation_service::{DealDraft, ValidationService};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn deal(id: &str, paid: f64, regular: f64, status: DealStatus) -> Deal {
    Deal::from_input(
        id,
        DealInput::new(format!("Deal {id}"), "AppSumo", "Productivity", paid, regular, d(2024, 1, 1))
            .with_status(status),
    )
}

fn named(id: &str, name: &str, platform: &str, category: &str, description: &str, status: DealStatus) -> Deal {
    Deal::from_input(
        id,
        DealInput::new(name, platform, category, 10.0, 100.0, d(2024, 1, 1))
            .with_status(status)
            .with_description(description),
    )
}

fn catalogue() -> Vec<Deal> {
    vec![
        named("1", "DealVault", "AppSumo", "Finance", "Track lifetime deals", DealStatus::Active),
        named("2", "Canva", "PitchGround", "Design", "Graphic design", DealStatus::Active),
        named("3", "Kittl", "PitchGround", "Design", "Vector templates", DealStatus::Expired),
        named("4", "Publer", "Dealify", "Marketing", "Social scheduling for AppSumo fans", DealStatus::Cancelled),
        named("5", "Frase", "StackSocial", "Content", "AI writer", DealStatus::Pending),
    ]
}

fn ids(deals: &[Deal]) -> Vec<&str> {
    deals.iter().map(|d| d.id.as_str()).collect()
}

// ═══════════════════════════════════════════════════════════════════
//  StatsService
// ═══════════════════════════════════════════════════════════════════

mod stats_service {
    use super::*;

    #[test]
    fn reference_scenario() {
        let deals = vec![
            deal("1", 40.0, 200.0, DealStatus::Active),
            deal("2", 60.0, 300.0, DealStatus::Expired),
        ];
        let stats = StatsService::new().compute(&deals);
        assert_eq!(stats.total_spent, 100.0);
        assert_eq!(stats.total_saved, 400.0);
        assert_eq!(stats.savings_percentage, 80);
        assert_eq!(stats.active_deals, 1);
        assert_eq!(stats.total_deals, 2);
        assert_eq!(stats.average_deal_value, 50.0);
        assert_eq!(stats.unused_ltds, 1);
        assert_eq!(stats.failed_ltds, 0);
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let stats = StatsService::new().compute(&[]);
        assert_eq!(stats.total_spent, 0.0);
        assert_eq!(stats.total_saved, 0.0);
        assert_eq!(stats.savings_percentage, 0);
        assert_eq!(stats.active_deals, 0);
        assert_eq!(stats.total_deals, 0);
        assert_eq!(stats.average_deal_value, 0.0);
        assert_eq!(stats.unused_ltds, 0);
        assert_eq!(stats.failed_ltds, 0);
        assert!(!stats.total_saved.is_nan());
        assert!(!stats.average_deal_value.is_nan());
    }

    #[test]
    fn saved_plus_spent_equals_regular_total() {
        let deals = vec![
            deal("1", 49.99, 480.0, DealStatus::Active),
            deal("2", 79.5, 1200.25, DealStatus::Pending),
            deal("3", 0.0, 99.0, DealStatus::Active),
            deal("4", 129.0, 1400.0, DealStatus::Cancelled),
        ];
        let stats = StatsService::new().compute(&deals);
        let regular: f64 = deals.iter().map(|d| d.regular_price).sum();
        assert!((stats.total_saved + stats.total_spent - regular).abs() < 1e-9);
    }

    #[test]
    fn average_is_spent_over_count() {
        let deals = vec![
            deal("1", 10.0, 20.0, DealStatus::Active),
            deal("2", 20.0, 40.0, DealStatus::Active),
            deal("3", 33.0, 40.0, DealStatus::Active),
        ];
        let stats = StatsService::new().compute(&deals);
        assert!((stats.average_deal_value - stats.total_spent / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_regular_prices_give_zero_percentage() {
        let deals = vec![deal("1", 0.0, 0.0, DealStatus::Active)];
        let stats = StatsService::new().compute(&deals);
        assert_eq!(stats.savings_percentage, 0);
        assert_eq!(stats.total_deals, 1);
    }

    #[test]
    fn counts_every_status() {
        let stats = StatsService::new().compute(&catalogue());
        assert_eq!(stats.active_deals, 2);
        assert_eq!(stats.pending_deals, 1);
        assert_eq!(stats.unused_ltds, 1);
        assert_eq!(stats.failed_ltds, 1);
        assert_eq!(stats.total_deals, 5);
    }

    #[test]
    fn refund_rate_is_not_reported() {
        assert_eq!(StatsService::new().compute(&catalogue()).refund_rate, None);
    }

    #[test]
    fn category_breakdown_computes_from_deals() {
        let categories = vec![
            Category::from_input("c1", CategoryInput::new("Design", "#EC4899")),
            Category::from_input("c2", CategoryInput::new("Finance", "#10B981")),
            Category::from_input("c3", CategoryInput::new("Empty", "#000")),
        ];
        let breakdown = StatsService::new().category_breakdown(&categories, &catalogue());
        assert_eq!(breakdown.len(), 3);

        let design = &breakdown[0];
        assert_eq!(design.name, "Design");
        assert_eq!(design.deal_count, 2);
        assert_eq!(design.active_deals, 1);
        assert_eq!(design.total_spent, 20.0);
        assert_eq!(design.total_saved, 180.0);
        assert_eq!(design.average_deal_value, 10.0);

        assert_eq!(breakdown[1].deal_count, 1);

        let empty = &breakdown[2];
        assert_eq!(empty.deal_count, 0);
        assert_eq!(empty.average_deal_value, 0.0);
    }

    #[test]
    fn category_breakdown_ignores_stored_count() {
        let mut category = Category::from_input("c1", CategoryInput::new("Design", ""));
        category.deal_count = 99;
        let breakdown = StatsService::new().category_breakdown(&[category], &catalogue());
        assert_eq!(breakdown[0].deal_count, 2);
    }

    #[test]
    fn platform_breakdown_computes_from_deals() {
        let platforms = vec![
            Platform::from_input("p1", PlatformInput::new("PitchGround")),
            Platform::from_input("p2", PlatformInput::new("Nowhere")),
        ];
        let breakdown = StatsService::new().platform_breakdown(&platforms, &catalogue());
        assert_eq!(breakdown[0].deal_count, 2);
        assert_eq!(breakdown[0].total_spent, 20.0);
        assert_eq!(breakdown[0].total_saved, 180.0);
        assert_eq!(breakdown[1].deal_count, 0);
        assert_eq!(breakdown[1].total_spent, 0.0);
    }

    #[test]
    fn recent_deals_newest_first_and_limited() {
        let mut deals = catalogue();
        deals[0].purchase_date = d(2024, 3, 1);
        deals[1].purchase_date = d(2023, 1, 1);
        deals[2].purchase_date = d(2024, 5, 1);
        deals[3].purchase_date = d(2024, 3, 1);
        deals[4].purchase_date = d(2022, 1, 1);

        let recent = StatsService::new().recent_deals(&deals, 3);
        assert_eq!(ids(&recent), vec!["3", "1", "4"]);
    }

    #[test]
    fn recent_deals_with_large_limit_returns_all() {
        let recent = StatsService::new().recent_deals(&catalogue(), 50);
        assert_eq!(recent.len(), 5);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FilterService
// ═══════════════════════════════════════════════════════════════════

mod filter_service {
    use super::*;

    #[test]
    fn empty_filter_returns_input_unchanged() {
        let deals = catalogue();
        let out = FilterService::new().filter(&deals, &DealFilter::new());
        assert_eq!(out, deals);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let out = FilterService::new().filter(&catalogue(), &DealFilter::new().with_query("VAULT"));
        assert_eq!(ids(&out), vec!["1"]);
    }

    #[test]
    fn query_matches_description_and_platform() {
        let service = FilterService::new();
        // "appsumo" hits deal 1 via platform and deal 4 via description.
        let out = service.filter(&catalogue(), &DealFilter::new().with_query("appsumo"));
        assert_eq!(ids(&out), vec!["1", "4"]);
    }

    #[test]
    fn query_does_not_match_category() {
        let out = FilterService::new().filter(&catalogue(), &DealFilter::new().with_query("marketing"));
        assert!(out.is_empty());
    }

    #[test]
    fn category_is_exact() {
        let service = FilterService::new();
        let out = service.filter(&catalogue(), &DealFilter::new().with_category("Design"));
        assert_eq!(ids(&out), vec!["2", "3"]);
        let none = service.filter(&catalogue(), &DealFilter::new().with_category("design"));
        assert!(none.is_empty());
    }

    #[test]
    fn criteria_are_conjunctive() {
        let filter = DealFilter::new()
            .with_category("Design")
            .with_platform("PitchGround")
            .with_status(DealStatus::Expired);
        let out = FilterService::new().filter(&catalogue(), &filter);
        assert_eq!(ids(&out), vec!["3"]);
    }

    #[test]
    fn result_satisfies_every_criterion() {
        let filter = DealFilter::new().with_query("a").with_status(DealStatus::Active);
        let deals = catalogue();
        let out = FilterService::new().filter(&deals, &filter);
        assert!(!out.is_empty());
        for deal in &out {
            assert!(deals.contains(deal));
            assert_eq!(deal.status, DealStatus::Active);
            let q = "a";
            assert!(
                deal.product_name.to_lowercase().contains(q)
                    || deal.description.to_lowercase().contains(q)
                    || deal.platform.to_lowercase().contains(q)
            );
        }
    }

    #[test]
    fn preserves_input_order() {
        let mut deals = catalogue();
        deals.reverse();
        let out = FilterService::new().filter(&deals, &DealFilter::new().with_platform("PitchGround"));
        assert_eq!(ids(&out), vec!["3", "2"]);
    }

    #[test]
    fn blank_criteria_impose_nothing() {
        let filter = DealFilter::new().with_query("").with_category("").with_platform("");
        assert_eq!(FilterService::new().filter(&catalogue(), &filter).len(), 5);
    }

    #[test]
    fn filtering_is_repeatable() {
        let service = FilterService::new();
        let filter = DealFilter::new().with_query("design");
        let first = service.filter(&catalogue(), &filter);
        let second = service.filter(&catalogue(), &filter);
        assert_eq!(first, second);
    }

    #[test]
    fn query_is_matched_as_typed() {
        let deals = vec![
            named("1", "Propel", "AppSumo", "Design", "", DealStatus::Active),
            named("2", "Canva Pro", "AppSumo", "Design", "", DealStatus::Active),
        ];
        let service = FilterService::new();
        let out = service.filter(&deals, &DealFilter::new().with_query(" pro"));
        assert_eq!(ids(&out), vec!["2"]);
        assert_eq!(ids(&service.search(&deals, " pro")), vec!["2"]);
    }

    #[test]
    fn whitespace_query_is_a_real_criterion() {
        let deals = vec![
            named("1", "Propel", "AppSumo", "Design", "", DealStatus::Active),
            named("2", "Canva   Pro", "AppSumo", "Design", "", DealStatus::Active),
        ];
        let out = FilterService::new().filter(&deals, &DealFilter::new().with_query("   "));
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn search_includes_category() {
        let out = FilterService::new().search(&catalogue(), "MARKETING");
        assert_eq!(ids(&out), vec!["4"]);
    }

    #[test]
    fn search_empty_query_matches_all() {
        assert_eq!(FilterService::new().search(&catalogue(), "").len(), 5);
    }

    #[test]
    fn exact_helpers() {
        let service = FilterService::new();
        assert_eq!(ids(&service.by_category(&catalogue(), "Content")), vec!["5"]);
        assert_eq!(ids(&service.by_platform(&catalogue(), "Dealify")), vec!["4"]);
        assert_eq!(ids(&service.by_status(&catalogue(), DealStatus::Active)), vec!["1", "2"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CalendarService
// ═══════════════════════════════════════════════════════════════════

mod calendar_service {
    use super::*;

    fn dated() -> Vec<Deal> {
        let mut deals = catalogue();
        deals[0].purchase_date = d(2024, 3, 8);
        deals[1].purchase_date = d(2024, 1, 15);
        deals[2].purchase_date = d(2024, 3, 8);
        deals[3].purchase_date = d(2023, 12, 1);
        deals[4].purchase_date = d(2024, 1, 15);
        deals
    }

    #[test]
    fn purchase_dates_are_distinct_and_sorted() {
        let dates = CalendarService::new().purchase_dates(&dated());
        assert_eq!(dates, vec![d(2023, 12, 1), d(2024, 1, 15), d(2024, 3, 8)]);
    }

    #[test]
    fn deals_on_a_date() {
        let on = CalendarService::new().deals_on(&dated(), d(2024, 3, 8));
        assert_eq!(ids(&on), vec!["1", "3"]);
    }

    #[test]
    fn no_deals_on_empty_day() {
        assert!(CalendarService::new().deals_on(&dated(), d(2020, 1, 1)).is_empty());
    }

    #[test]
    fn empty_collection_has_no_dates() {
        assert!(CalendarService::new().purchase_dates(&[]).is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ValidationService
// ═══════════════════════════════════════════════════════════════════

mod validation_service {
    use super::*;

    fn valid_draft() -> DealDraft {
        DealDraft {
            product_name: "  DealVault  ".into(),
            platform: "AppSumo".into(),
            category: "Finance".into(),
            purchase_price: "49".into(),
            regular_price: "299.00".into(),
            purchase_date: "01/15/2024".into(),
            status: "pending".into(),
            description: "Track deals".into(),
            access_url: "https://dealvault.example.com/login".into(),
            notes: String::new(),
            logo_url: String::new(),
        }
    }

    fn fields(draft: &DealDraft) -> Vec<String> {
        ValidationService::new()
            .check_draft(draft)
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn valid_draft_becomes_input() {
        let input = ValidationService::new().validate_draft(&valid_draft()).unwrap();
        assert_eq!(input.product_name, "DealVault");
        assert_eq!(input.purchase_price, 49.0);
        assert_eq!(input.regular_price, 299.0);
        assert_eq!(input.purchase_date, d(2024, 1, 15));
        assert_eq!(input.status, DealStatus::Pending);
        assert_eq!(input.access_url.as_deref(), Some("https://dealvault.example.com/login"));
        assert_eq!(input.notes, None);
    }

    #[test]
    fn iso_date_is_accepted() {
        let draft = DealDraft {
            purchase_date: "2024-01-15".into(),
            ..valid_draft()
        };
        assert!(fields(&draft).is_empty());
    }

    #[test]
    fn default_draft_is_prefilled() {
        let draft = DealDraft::default();
        assert_eq!(draft.status, "active");
        assert!(!draft.purchase_date.is_empty());
        let found = fields(&draft);
        assert!(!found.contains(&"purchaseDate".to_string()));
        assert!(!found.contains(&"status".to_string()));
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let draft = DealDraft {
            purchase_date: String::new(),
            ..DealDraft::default()
        };
        let found = fields(&draft);
        for field in ["productName", "platform", "category", "purchasePrice", "regularPrice", "purchaseDate"] {
            assert!(found.contains(&field.to_string()), "missing {field}");
        }
    }

    #[test]
    fn purchase_must_be_below_regular() {
        let draft = DealDraft {
            purchase_price: "300".into(),
            regular_price: "299".into(),
            ..valid_draft()
        };
        let errors = ValidationService::new().check_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "purchasePrice");
        assert_eq!(errors[0].message, "Purchase price must be less than regular price");
    }

    #[test]
    fn non_positive_price_rejected() {
        let draft = DealDraft {
            purchase_price: "-5".into(),
            ..valid_draft()
        };
        let errors = ValidationService::new().check_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Valid purchase price is required");
    }

    #[test]
    fn unparseable_price_rejected() {
        let draft = DealDraft {
            regular_price: "lots".into(),
            ..valid_draft()
        };
        assert_eq!(fields(&draft), vec!["regularPrice".to_string()]);
    }

    #[test]
    fn bad_url_rejected() {
        let draft = DealDraft {
            access_url: "not a url".into(),
            ..valid_draft()
        };
        assert_eq!(fields(&draft), vec!["accessUrl".to_string()]);
    }

    #[test]
    fn blank_url_is_fine() {
        let draft = DealDraft {
            access_url: "  ".into(),
            ..valid_draft()
        };
        let input = ValidationService::new().validate_draft(&draft).unwrap();
        assert_eq!(input.access_url, None);
    }

    #[test]
    fn bad_date_rejected() {
        let draft = DealDraft {
            purchase_date: "13/45/2024".into(),
            ..valid_draft()
        };
        assert_eq!(fields(&draft), vec!["purchaseDate".to_string()]);
    }

    #[test]
    fn unknown_status_rejected() {
        let draft = DealDraft {
            status: "refunded".into(),
            ..valid_draft()
        };
        assert_eq!(fields(&draft), vec!["status".to_string()]);
    }

    #[test]
    fn validate_joins_messages() {
        let draft = DealDraft {
            product_name: String::new(),
            access_url: "nope".into(),
            ..valid_draft()
        };
        let err = ValidationService::new().validate_draft(&draft).unwrap_err();
        match err {
            CoreError::ValidationError(msg) => {
                assert!(msg.contains("productName: Product name is required"));
                assert!(msg.contains("accessUrl: Please enter a valid URL"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn typed_input_checks() {
        let service = ValidationService::new();
        let ok = DealInput::new("A", "B", "C", 1.0, 2.0, d(2024, 1, 1));
        assert!(service.validate_input(&ok).is_ok());

        let bad = DealInput::new("A", "B", "C", 5.0, 2.0, d(2024, 1, 1));
        let errors = service.check_input(&bad);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "purchasePrice");
    }

    #[test]
    fn savings_preview_follows_prices() {
        let preview = valid_draft().savings_preview();
        assert_eq!(preview.amount, 250.0);
        assert_eq!(preview.percentage, 84);

        let empty = DealDraft::default().savings_preview();
        assert_eq!(empty.amount, 0.0);
        assert_eq!(empty.percentage, 0);
    }
}
