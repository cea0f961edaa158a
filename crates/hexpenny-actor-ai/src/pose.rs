//! Pure pose math for limb animation.
//!
//! These functions turn an entity's accumulated animation clock into the
//! joint angles the renderer applies. They hold no state and draw no
//! randomness, so poses replay identically for a given clock value.

/// Player joint angles for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerPose {
    pub right_arm_angle: f64,
    pub left_arm_angle: f64,
    pub broom_tilt: f64,
    pub leg_swing: f64,
}

/// Dog joint angles for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DogPose {
    pub bob: f64,
    pub tail_angle: f64,
    pub leg_angle: f64,
    pub head_tilt: f64,
}

/// Compute the player's pose. Attacking swings the arms in a fast wide
/// arc with the broom raised; walking is a gentler counter-swing.
pub fn player_pose(anim_time: f64, is_attacking: bool, is_moving: bool) -> PlayerPose {
    let mut pose = PlayerPose::default();

    if is_attacking {
        let swing = (anim_time * 3.0).sin();
        pose.left_arm_angle = swing * 1.5;
        pose.right_arm_angle = -swing * 1.5;
        pose.broom_tilt = swing * 0.5;
    } else if is_moving {
        let swing = anim_time.sin();
        pose.left_arm_angle = swing * 0.3;
        pose.right_arm_angle = -swing * 0.3;
        pose.broom_tilt = swing * 0.2;
    }

    if is_moving {
        pose.leg_swing = anim_time.sin() * 0.3;
    }

    pose
}

/// Vampire limb swing (arms and legs counter-swing at the same amplitude).
pub fn vampire_limb_swing(anim_time: f64) -> f64 {
    anim_time.sin() * 0.5
}

/// Compute the dog's pose. Everything gets faster and wider while the
/// player is attacking; the head tilt fires intermittently as a bark cue.
pub fn dog_pose(anim_time: f64, player_is_attacking: bool) -> DogPose {
    let bob_intensity = if player_is_attacking { 0.15 } else { 0.05 };
    let tail_speed = if player_is_attacking { 4.0 } else { 2.0 };
    let tail_intensity = if player_is_attacking { 0.6 } else { 0.3 };
    let leg_speed = if player_is_attacking { 3.0 } else { 2.0 };
    let leg_intensity = if player_is_attacking { 0.5 } else { 0.3 };

    let head_tilt = if (anim_time * 5.0).sin() > 0.8 {
        (anim_time * 10.0).sin() * 0.2
    } else {
        0.0
    };

    DogPose {
        bob: anim_time.sin() * bob_intensity,
        tail_angle: (anim_time * tail_speed).sin() * tail_intensity,
        leg_angle: (anim_time * leg_speed).sin() * leg_intensity,
        head_tilt,
    }
}
