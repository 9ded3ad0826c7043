//! Built-in sample image catalog. Loaded on demand by the idempotent
//! `/sample-images/load` operation; the raw tag blobs mirror what the
//! tagging gateway would have returned for each picture.

pub struct SampleSeed {
    pub filename: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
    pub tags_json: &'static str,
}

pub const SAMPLE_IMAGES: &[SampleSeed] = &[
    SampleSeed {
        filename: "mountain_lake.jpg",
        image_url: "/static/samples/mountain_lake.jpg",
        description: "Alpine lake at sunrise with snowy peaks",
        tags_json: r#"[
            {"tag": {"en": "mountain"}, "confidence": 87.3},
            {"tag": {"en": "lake"}, "confidence": 82.9},
            {"tag": {"en": "landscape"}, "confidence": 74.1},
            {"tag": {"en": "snow"}, "confidence": 58.6},
            {"tag": {"en": "reflection"}, "confidence": 44.2},
            {"tag": {"en": "sunrise"}, "confidence": 33.8},
            {"tag": {"en": "hiking"}, "confidence": 21.4},
            {"tag": {"en": "glacier"}, "confidence": 12.7}
        ]"#,
    },
    SampleSeed {
        filename: "city_night.jpg",
        image_url: "/static/samples/city_night.jpg",
        description: "Downtown skyline after dark",
        tags_json: r#"[
            {"tag": {"en": "city"}, "confidence": 91.5},
            {"tag": {"en": "skyline"}, "confidence": 79.4},
            {"tag": {"en": "night"}, "confidence": 76.2},
            {"tag": {"en": "skyscraper"}, "confidence": 63.0},
            {"tag": {"en": "lights"}, "confidence": 51.8},
            {"tag": {"en": "architecture"}, "confidence": 47.5},
            {"tag": {"en": "traffic"}, "confidence": 26.9}
        ]"#,
    },
    SampleSeed {
        filename: "golden_retriever.jpg",
        image_url: "/static/samples/golden_retriever.jpg",
        description: "Golden retriever playing in a park",
        tags_json: r#"[
            {"tag": {"en": "dog"}, "confidence": 95.8},
            {"tag": {"en": "retriever"}, "confidence": 84.6},
            {"tag": {"en": "pet"}, "confidence": 77.3},
            {"tag": {"en": "animal"}, "confidence": 71.9},
            {"tag": {"en": "grass"}, "confidence": 49.1},
            {"tag": {"en": "park"}, "confidence": 38.4},
            {"tag": {"en": "ball"}, "confidence": 17.2}
        ]"#,
    },
    SampleSeed {
        filename: "beach_sunset.jpg",
        image_url: "/static/samples/beach_sunset.jpg",
        description: "Tropical beach at sunset",
        tags_json: r#"[
            {"tag": {"en": "beach"}, "confidence": 89.7},
            {"tag": {"en": "sunset"}, "confidence": 85.2},
            {"tag": {"en": "ocean"}, "confidence": 78.8},
            {"tag": {"en": "sand"}, "confidence": 61.3},
            {"tag": {"en": "palm"}, "confidence": 45.6},
            {"tag": {"en": "sky"}, "confidence": 43.0},
            {"tag": {"en": "vacation"}, "confidence": 28.1},
            {"tag": {"en": "surfing"}, "confidence": 9.5}
        ]"#,
    },
    SampleSeed {
        filename: "fresh_salad.jpg",
        image_url: "/static/samples/fresh_salad.jpg",
        description: "Bowl of fresh garden salad",
        tags_json: r#"[
            {"tag": {"en": "food"}, "confidence": 92.1},
            {"tag": {"en": "salad"}, "confidence": 88.4},
            {"tag": {"en": "vegetable"}, "confidence": 80.0},
            {"tag": {"en": "healthy"}, "confidence": 60.0},
            {"tag": {"en": "tomato"}, "confidence": 52.7},
            {"tag": {"en": "bowl"}, "confidence": 35.9},
            {"tag": {"en": "restaurant"}, "confidence": 19.8}
        ]"#,
    },
];
