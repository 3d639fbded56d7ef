// Wire-level qualifier and type codes used by PriceXplorer_ExtremeSearch
use serde::{Serialize, Serializer};

// Every code enum serializes as its bare wire string
macro_rules! wire_codes {
    ($name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

wire_codes!(LocationType {
    Country => "C",
});

wire_codes!(LocationQualifier {
    Destination => "D",
});

wire_codes!(AttributeFunction {
    Grouping => "GRP",
});

// Result aggregation dimensions
wire_codes!(AttributeType {
    Destination => "DEST",
    Country => "COUNTRY",
    Week => "WEEK",
    DepartureDay => "DEPDAY",
    StayDuration => "DURATION",
});

wire_codes!(QuantityQualifier {
    CheapestNonStop => "CNS",
    CheapestOverall => "COV",
    Days => "DAY",
});

wire_codes!(SelectionOption {
    PriceResultDistribution => "PRD",
    InboundDepartureDays => "IDD",
    OutboundDepartureDays => "ODD",
});
