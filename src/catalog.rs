// ABOUTME: Built-in exercise catalog browsed from the muscle-group body map
// ABOUTME: Lookup by id, muscle group, and difficulty over an immutable exercise list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CycleFit

//! Exercise catalog
//!
//! An in-memory, read-only list of exercises. The catalog carries no
//! persistence; hosts that keep their own exercise library can build one with
//! [`ExerciseCatalog::from_exercises`].

use cyclefit_core::models::{Difficulty, Equipment, Exercise, MuscleGroup};

/// Read-only exercise collection
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

/// Compact row used to build the built-in catalog
struct Entry {
    id: &'static str,
    name: &'static str,
    muscle_group: MuscleGroup,
    equipment: Equipment,
    difficulty: Difficulty,
    instructions: &'static str,
    tips: &'static str,
}

const BUILTIN: &[Entry] = &[
    Entry {
        id: "ex_push_ups",
        name: "Push-ups",
        muscle_group: MuscleGroup::Chest,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Beginner,
        instructions: "Start in plank position, lower chest to ground, push back up",
        tips: "Keep core tight and body straight",
    },
    Entry {
        id: "ex_bench_press",
        name: "Bench Press",
        muscle_group: MuscleGroup::Chest,
        equipment: Equipment::Barbell,
        difficulty: Difficulty::Intermediate,
        instructions: "Lie on bench, lower bar to chest, press up",
        tips: "Keep feet planted and back arched",
    },
    Entry {
        id: "ex_dumbbell_flyes",
        name: "Dumbbell Flyes",
        muscle_group: MuscleGroup::Chest,
        equipment: Equipment::Dumbbells,
        difficulty: Difficulty::Intermediate,
        instructions: "Lie on bench, open arms wide, bring dumbbells together",
        tips: "Control the weight, feel the stretch",
    },
    Entry {
        id: "ex_pull_ups",
        name: "Pull-ups",
        muscle_group: MuscleGroup::Back,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Intermediate,
        instructions: "Hang from bar, pull body up until chin over bar",
        tips: "Engage lats, avoid swinging",
    },
    Entry {
        id: "ex_bent_over_rows",
        name: "Bent Over Rows",
        muscle_group: MuscleGroup::Back,
        equipment: Equipment::Barbell,
        difficulty: Difficulty::Intermediate,
        instructions: "Bend at hips, pull bar to lower chest",
        tips: "Keep back straight, squeeze shoulder blades",
    },
    Entry {
        id: "ex_lat_pulldowns",
        name: "Lat Pulldowns",
        muscle_group: MuscleGroup::Back,
        equipment: Equipment::Machine,
        difficulty: Difficulty::Beginner,
        instructions: "Pull bar down to upper chest",
        tips: "Focus on pulling with lats, not arms",
    },
    Entry {
        id: "ex_squats",
        name: "Squats",
        muscle_group: MuscleGroup::Legs,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Beginner,
        instructions: "Lower hips back and down, return to standing",
        tips: "Keep knees behind toes, chest up",
    },
    Entry {
        id: "ex_deadlifts",
        name: "Deadlifts",
        muscle_group: MuscleGroup::Legs,
        equipment: Equipment::Barbell,
        difficulty: Difficulty::Advanced,
        instructions: "Lift bar from ground to hip level",
        tips: "Keep bar close to body, drive through heels",
    },
    Entry {
        id: "ex_lunges",
        name: "Lunges",
        muscle_group: MuscleGroup::Legs,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Beginner,
        instructions: "Step forward, lower back knee, return to start",
        tips: "Keep front knee over ankle",
    },
    Entry {
        id: "ex_hip_thrusts",
        name: "Hip Thrusts",
        muscle_group: MuscleGroup::Glutes,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Beginner,
        instructions: "Lie on back, thrust hips up, squeeze glutes",
        tips: "Focus on glute activation",
    },
    Entry {
        id: "ex_bulgarian_split_squats",
        name: "Bulgarian Split Squats",
        muscle_group: MuscleGroup::Glutes,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Intermediate,
        instructions: "Rear foot elevated, squat down on front leg",
        tips: "Keep torso upright",
    },
    Entry {
        id: "ex_glute_bridges",
        name: "Glute Bridges",
        muscle_group: MuscleGroup::Glutes,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Beginner,
        instructions: "Lie on back, lift hips up, squeeze glutes",
        tips: "Hold at top for 2 seconds",
    },
    Entry {
        id: "ex_bicep_curls",
        name: "Bicep Curls",
        muscle_group: MuscleGroup::Arms,
        equipment: Equipment::Dumbbells,
        difficulty: Difficulty::Beginner,
        instructions: "Curl weights up to shoulders",
        tips: "Control the negative",
    },
    Entry {
        id: "ex_tricep_dips",
        name: "Tricep Dips",
        muscle_group: MuscleGroup::Arms,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Intermediate,
        instructions: "Lower body using arms, push back up",
        tips: "Keep elbows close to body",
    },
    Entry {
        id: "ex_overhead_press",
        name: "Overhead Press",
        muscle_group: MuscleGroup::Arms,
        equipment: Equipment::Dumbbells,
        difficulty: Difficulty::Intermediate,
        instructions: "Press weights overhead",
        tips: "Keep core tight",
    },
    Entry {
        id: "ex_lateral_raises",
        name: "Lateral Raises",
        muscle_group: MuscleGroup::Shoulders,
        equipment: Equipment::Dumbbells,
        difficulty: Difficulty::Beginner,
        instructions: "Raise arms out to sides",
        tips: "Slight bend in elbows",
    },
    Entry {
        id: "ex_shoulder_press",
        name: "Shoulder Press",
        muscle_group: MuscleGroup::Shoulders,
        equipment: Equipment::Dumbbells,
        difficulty: Difficulty::Intermediate,
        instructions: "Press weights up from shoulder level",
        tips: "Keep core engaged",
    },
    Entry {
        id: "ex_rear_delt_flyes",
        name: "Rear Delt Flyes",
        muscle_group: MuscleGroup::Shoulders,
        equipment: Equipment::Dumbbells,
        difficulty: Difficulty::Intermediate,
        instructions: "Bend forward, raise arms out to sides",
        tips: "Squeeze shoulder blades",
    },
    Entry {
        id: "ex_planks",
        name: "Planks",
        muscle_group: MuscleGroup::Core,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Beginner,
        instructions: "Hold straight body position",
        tips: "Keep hips level, breathe normally",
    },
    Entry {
        id: "ex_crunches",
        name: "Crunches",
        muscle_group: MuscleGroup::Core,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Beginner,
        instructions: "Lift shoulders off ground",
        tips: "Focus on abs, not neck",
    },
    Entry {
        id: "ex_russian_twists",
        name: "Russian Twists",
        muscle_group: MuscleGroup::Core,
        equipment: Equipment::Bodyweight,
        difficulty: Difficulty::Intermediate,
        instructions: "Sit up, rotate torso side to side",
        tips: "Keep feet off ground for more challenge",
    },
];

impl ExerciseCatalog {
    /// The catalog shipped with the application
    #[must_use]
    pub fn builtin() -> Self {
        let exercises = BUILTIN
            .iter()
            .map(|entry| Exercise {
                id: entry.id.to_owned(),
                name: entry.name.to_owned(),
                muscle_group: entry.muscle_group,
                equipment: entry.equipment,
                difficulty: entry.difficulty,
                instructions: entry.instructions.to_owned(),
                tips: entry.tips.to_owned(),
            })
            .collect();
        Self { exercises }
    }

    /// Catalog over a caller-supplied exercise list
    #[must_use]
    pub const fn from_exercises(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    /// Find an exercise by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Exercises targeting a muscle group, in catalog order
    pub fn by_muscle_group(&self, group: MuscleGroup) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |e| e.muscle_group == group)
    }

    /// Exercises of a difficulty tier, in catalog order
    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |e| e.difficulty == difficulty)
    }

    /// All exercises
    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
